//! Candidate file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// List entries directly inside `dir` whose name ends in `.{extension}`.
///
/// Does not recurse. Entries are not filtered by type: a directory or broken
/// symlink with a matching name is returned and fails later when read. A bare
/// `.md` counts as a candidate. Results are sorted by path so runs are
/// reproducible.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{extension}");
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        if !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }
        found.push(entry.path());
    }
    found.sort();
    debug!(dir = %dir.display(), count = found.len(), "discovered candidate files");
    Ok(found)
}
