//! Per-file read, transform, and conditional rewrite.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use crate::core::newline::normalize_newlines;
use crate::core::transform::{matching_rules, transform};
use crate::core::types::{FileOutcome, WriteMode};

/// Process one candidate file.
///
/// Content is decoded as UTF-8 with newlines normalized to `\n`, then passed
/// through [`transform`]. Changed content is written back in [`WriteMode::Apply`].
/// Any I/O or decoding failure is returned as [`FileOutcome::Error`].
#[instrument(skip_all, fields(path = %path.display()))]
pub fn process_file(path: &Path, mode: WriteMode) -> FileOutcome {
    match try_process_file(path, mode) {
        Ok(outcome) => outcome,
        Err(err) => {
            let message = format!("{err:#}");
            warn!(error = %message, "failed to process file");
            FileOutcome::Error(message)
        }
    }
}

fn try_process_file(path: &Path, mode: WriteMode) -> Result<FileOutcome> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let original = normalize_newlines(&raw);
    let fixed = transform(&original);

    if fixed == original {
        debug!("no rule matched");
        return Ok(FileOutcome::Unchanged);
    }

    debug!(rules = ?matching_rules(&original), "content changed");
    match mode {
        WriteMode::Check => Ok(FileOutcome::WouldFix),
        WriteMode::Apply => {
            fs::write(path, fixed.as_bytes())
                .with_context(|| format!("write {}", path.display()))?;
            Ok(FileOutcome::Fixed)
        }
    }
}
