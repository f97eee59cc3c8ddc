use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Config file looked up when none is given
pub const DEFAULT_CONFIG_FILE: &str = "family-tree.toml";

/// Application settings, read from TOML
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file holding the tree
    pub store_path: PathBuf,

    /// Where `export` writes the workbook
    pub export_path: PathBuf,

    /// Secret that must accompany every save, if set
    pub save_secret: Option<String>,

    /// Default depth limit for `show`
    pub outline_depth: Option<usize>,

    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("family-tree.json"),
            export_path: PathBuf::from(tree_export::DEFAULT_FILE_NAME),
            save_secret: None,
            outline_depth: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the config file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        debug!("Parsed config: {:?}", config.redacted());
        Ok(config)
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    pub fn with_save_secret(mut self, secret: impl Into<String>) -> Self {
        self.save_secret = Some(secret.into());
        self
    }

    pub fn with_outline_depth(mut self, depth: usize) -> Self {
        self.outline_depth = Some(depth);
        self
    }

    /// Check a supplied secret against the configured one
    ///
    /// Always true when no secret is configured.
    pub fn accepts_secret(&self, supplied: Option<&str>) -> bool {
        match &self.save_secret {
            Some(expected) => supplied == Some(expected.as_str()),
            None => true,
        }
    }

    fn redacted(&self) -> Self {
        Self {
            save_secret: self.save_secret.as_ref().map(|_| "***".to_string()),
            ..self.clone()
        }
    }
}
