use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use family_tree::prelude::*;
use log::{error, info, warn};
use tree_export::{export_tree, XlsxFileSink};
use tree_store::TreeStore;

use crate::config::AppConfig;

pub const NOTICE_SAVED: &str = "Family tree updated!";
pub const NOTICE_SAVE_FAILED: &str = "Update failed.";
pub const NOTICE_WRONG_SECRET: &str = "Incorrect password!";
pub const NOTICE_UNCHANGED: &str = "Nothing changed.";

/// Result of a save attempt that reached a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The store accepted the document and the session adopted its echo
    Saved,
    /// The secret did not match; the store was not touched
    Rejected,
}

impl SaveOutcome {
    pub fn notice(self) -> &'static str {
        match self {
            SaveOutcome::Saved => NOTICE_SAVED,
            SaveOutcome::Rejected => NOTICE_WRONG_SECRET,
        }
    }
}

/// Generation and member counts of the current tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub total_members: usize,
    pub generations: usize,
}

/// Wires the store, the edit session and the exporter together
pub struct FamilyTreeApp<S, G = RandomIdGenerator> {
    config: AppConfig,
    store: S,
    session: EditSession<G>,
}

impl<S: TreeStore> FamilyTreeApp<S> {
    /// Open the stored tree with a random-id session
    pub fn open(config: AppConfig, store: S) -> Result<Self> {
        Self::with_session(config, store, EditSession::new())
    }
}

impl<S: TreeStore, G: IdGenerator> FamilyTreeApp<S, G> {
    /// Open the stored tree into the given session
    pub fn with_session(config: AppConfig, store: S, session: EditSession<G>) -> Result<Self> {
        let mut app = Self {
            config,
            store,
            session,
        };
        app.reload()?;
        Ok(app)
    }

    /// Replace the session's tree with the stored one
    ///
    /// On failure the session keeps whatever it held before.
    pub fn reload(&mut self) -> Result<()> {
        let document = self.store.load().map_err(|err| {
            error!("Loading the tree failed: {err:#}");
            err
        })?;
        self.session.load(&document);
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &EditSession<G> {
        &self.session
    }

    /// Apply one edit in memory
    pub fn edit(&mut self, intent: EditIntent) -> bool {
        let target = intent.target().cloned();
        let changed = self.session.dispatch(intent);
        if !changed {
            match target {
                Some(id) if !self.session.tree().is_some_and(|tree| tree.contains(&id)) => {
                    warn!("No person with id {id}")
                }
                _ => warn!("Edit changed nothing"),
            }
        }
        changed
    }

    /// Replace the whole tree with an imported document
    pub fn import(&mut self, document: &TreeDocument) -> bool {
        self.session.import(document)
    }

    /// Push the current tree to the store
    ///
    /// A wrong secret cancels the save before the store is touched. A store
    /// failure is returned and leaves the session as it was.
    pub fn save(&mut self, secret: Option<&str>) -> Result<SaveOutcome> {
        if !self.config.accepts_secret(secret) {
            warn!("Save rejected: secret mismatch");
            return Ok(SaveOutcome::Rejected);
        }

        let document = self
            .session
            .document()
            .unwrap_or_else(TreeDocument::empty);
        let echoed = self
            .store
            .save(&document)
            .context(NOTICE_SAVE_FAILED)
            .map_err(|err| {
                error!("Saving the tree failed: {err:#}");
                err
            })?;

        self.session.mark_saved(&echoed);
        info!("Saved tree with {} members", self.session.total_members());
        Ok(SaveOutcome::Saved)
    }

    /// Render the outline, limited to `depth` or the configured default
    pub fn outline(&self, depth: Option<usize>) -> String {
        let options = OutlineOptions::new().max_depth(depth.or(self.config.outline_depth));
        match self.session.tree() {
            Some(tree) => render_outline(tree, &options),
            None => render_outline(&FamilyTree::default(), &options),
        }
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats {
            total_members: self.session.total_members(),
            generations: self.session.tree().map_or(0, FamilyTree::depth),
        }
    }

    /// Write the workbook to `output` or the configured export path
    pub fn export(&self, output: Option<&Path>) -> Result<PathBuf> {
        let path = output.unwrap_or(&self.config.export_path).to_path_buf();
        let mut sink = XlsxFileSink::new(&path);
        export_tree(self.session.tree(), &mut sink)?;
        Ok(path)
    }
}
