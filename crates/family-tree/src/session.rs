//! The single owner of the document being edited

use log::{debug, info};

use crate::document::TreeDocument;
use crate::intent::EditIntent;
use crate::tree::{FamilyTree, IdGenerator, RandomIdGenerator, ROOT_COUPLE};

/// Holds the current tree and applies edit intents to it
///
/// The tree is unset until the first [`EditSession::load`]. Intents dispatched
/// before that apply to an empty tree.
pub struct EditSession<G = RandomIdGenerator> {
    tree: Option<FamilyTree>,
    ids: G,
    dirty: bool,
}

impl EditSession<RandomIdGenerator> {
    /// Create a session that mints random ids
    pub fn new() -> Self {
        Self::with_id_generator(RandomIdGenerator::new())
    }
}

impl Default for EditSession<RandomIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> EditSession<G> {
    /// Create a session using the given id generator
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            tree: None,
            ids,
            dirty: false,
        }
    }

    /// Replace the tree wholesale with the normalized document
    pub fn load(&mut self, document: &TreeDocument) {
        let tree = document.normalize(&mut self.ids);
        info!(
            "Loaded family tree with {} members across {} generations",
            tree.total_members(),
            tree.depth()
        );
        self.tree = Some(tree);
        self.dirty = false;
    }

    /// Adopt the document echoed back by a successful save
    pub fn mark_saved(&mut self, echoed: &TreeDocument) {
        debug!("Replacing local tree with the saved document");
        self.load(echoed);
    }

    /// Replace the tree with an imported document, minting ids from this session
    ///
    /// Unlike [`EditSession::load`] this counts as an edit: the session becomes
    /// dirty when the tree changes.
    pub fn import(&mut self, document: &TreeDocument) -> bool {
        let tree = document.normalize(&mut self.ids);
        info!("Importing tree with {} members", tree.total_members());
        self.dispatch(EditIntent::SetTree(tree))
    }

    /// Apply an intent; returns whether the tree changed
    pub fn dispatch(&mut self, intent: EditIntent) -> bool {
        debug!("Dispatching {}", intent);
        let current = self.tree.take().unwrap_or_default();
        let next = intent.apply(&current, &mut self.ids);
        let changed = next != current;

        if changed {
            self.dirty = true;
        } else {
            debug!("Intent left the tree unchanged");
        }
        self.tree = Some(next);
        changed
    }

    /// The current tree, if one has been loaded or edited into existence
    pub fn tree(&self) -> Option<&FamilyTree> {
        self.tree.as_ref()
    }

    /// The current tree in its stored form
    pub fn document(&self) -> Option<TreeDocument> {
        self.tree.as_ref().map(TreeDocument::from)
    }

    /// Displayed member total; an unset tree still counts the root couple
    pub fn total_members(&self) -> usize {
        self.tree
            .as_ref()
            .map_or(ROOT_COUPLE, FamilyTree::total_members)
    }

    /// Whether a tree has been loaded
    pub fn is_loaded(&self) -> bool {
        self.tree.is_some()
    }

    /// Whether the tree changed since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
