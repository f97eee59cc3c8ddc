use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use family_tree::TreeDocument;
use log::{debug, info};

use crate::store::TreeStore;

/// Keeps the document in one JSON file
///
/// Writes go to a sibling temp file that is then renamed over the target, so
/// a reader never sees a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read(&self) -> Result<TreeDocument> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read tree from {}", self.path.display()))?;
        TreeDocument::from_json_str(&text)
            .with_context(|| format!("Invalid tree file {}", self.path.display()))
    }

    fn write(&self, document: &TreeDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, document.to_json_pretty()?)
            .with_context(|| format!("Failed to write {}", temp.display()))?;
        fs::rename(&temp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl TreeStore for JsonFileStore {
    fn load(&self) -> Result<TreeDocument> {
        if !self.path.exists() {
            info!("Creating empty tree at {}", self.path.display());
            self.write(&TreeDocument::empty())?;
        }
        self.read()
    }

    fn save(&self, document: &TreeDocument) -> Result<TreeDocument> {
        self.write(document)?;
        debug!("Saved tree to {}", self.path.display());
        self.read()
    }
}
