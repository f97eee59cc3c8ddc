use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use family_tree::TreeDocument;
use log::debug;

use crate::store::TreeStore;

/// Keeps the document in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<TreeDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `document`
    pub fn with_document(document: TreeDocument) -> Self {
        Self {
            document: Mutex::new(Some(document)),
        }
    }

    /// The stored document without creating one
    pub fn peek(&self) -> Result<Option<TreeDocument>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<TreeDocument>>> {
        self.document
            .lock()
            .map_err(|_| anyhow!("Tree store lock poisoned"))
    }
}

impl TreeStore for MemoryStore {
    fn load(&self) -> Result<TreeDocument> {
        let mut slot = self.lock()?;
        let document = slot.get_or_insert_with(|| {
            debug!("No stored tree, creating an empty one");
            TreeDocument::empty()
        });
        Ok(document.clone())
    }

    fn save(&self, document: &TreeDocument) -> Result<TreeDocument> {
        let mut slot = self.lock()?;
        *slot = Some(document.clone());
        Ok(document.clone())
    }
}
