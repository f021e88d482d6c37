//! Optional fixer configuration stored in `docfix.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "docfix.toml";

/// Fixer configuration (TOML).
///
/// Every field is optional in the file; missing fields fall back to defaults.
/// Command-line flags override whatever is loaded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixerConfig {
    /// Directory scanned (non-recursively) for candidate files.
    pub target_dir: PathBuf,

    /// File extension of candidate files, without the leading dot.
    pub extension: String,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("docs/components"),
            extension: "md".to_string(),
        }
    }
}

impl FixerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_dir.as_os_str().is_empty() {
            return Err(anyhow!("target_dir must not be empty"));
        }
        if self.extension.trim().is_empty() {
            return Err(anyhow!("extension must not be empty"));
        }
        if self.extension.contains('.') || self.extension.contains('/') {
            return Err(anyhow!(
                "extension must be a bare suffix like \"md\", got {:?}",
                self.extension
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FixerConfig::default()`.
pub fn load_config(path: &Path) -> Result<FixerConfig> {
    if !path.exists() {
        let cfg = FixerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FixerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
