//! Test-only helpers for building throwaway documentation directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A temporary docs directory, removed on drop.
pub struct DocsDir {
    temp: TempDir,
}

impl DocsDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp docs dir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `name` (relative, parent dirs created) and return its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.temp.path().join(name);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
