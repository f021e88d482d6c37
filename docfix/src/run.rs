//! Batch driver: discover candidates, process each one, tally the results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::types::{FileOutcome, RunSummary, WriteMode};
use crate::io::discover::discover;
use crate::io::files::process_file;

/// Options for a single batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Candidate extension, without the leading dot.
    pub extension: String,
    pub mode: WriteMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            mode: WriteMode::Apply,
        }
    }
}

/// Outcome for one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    /// File name for display, falling back to the full path.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Summary of a run invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub dir: PathBuf,
    pub mode: WriteMode,
    pub files: Vec<FileReport>,
    pub summary: RunSummary,
}

/// Process every candidate file in `dir`, one at a time.
///
/// Per-file failures are recorded in the outcome and never stop the run.
/// Only discovery failures are returned as errors. `on_file` is called after
/// each file is processed, in discovery order.
pub fn run<F: FnMut(&FileReport)>(
    dir: &Path,
    options: &RunOptions,
    mut on_file: F,
) -> Result<RunOutcome> {
    debug!(dir = %dir.display(), extension = %options.extension, mode = ?options.mode, "starting run");
    let candidates = discover(dir, &options.extension)
        .with_context(|| format!("discover *.{} files", options.extension))?;

    let mut summary = RunSummary::default();
    let mut files = Vec::with_capacity(candidates.len());
    for path in candidates {
        let outcome = process_file(&path, options.mode);
        summary.record(&outcome);
        let report = FileReport { path, outcome };
        on_file(&report);
        files.push(report);
    }

    info!(
        scanned = summary.scanned,
        fixed = summary.fixed,
        errors = summary.errors,
        "run finished"
    );
    Ok(RunOutcome {
        dir: dir.to_path_buf(),
        mode: options.mode,
        files,
        summary,
    })
}
