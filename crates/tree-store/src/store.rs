use anyhow::Result;
use family_tree::TreeDocument;

/// Storage for the single family tree document
///
/// A store holds at most one document. Saving replaces it whole; there are
/// no partial updates.
pub trait TreeStore: Send + Sync {
    /// Return the stored document, first storing an empty one if none exists
    fn load(&self) -> Result<TreeDocument>;

    /// Replace the stored document and return it as stored
    ///
    /// The returned document is the canonical truth the caller should adopt.
    fn save(&self, document: &TreeDocument) -> Result<TreeDocument>;
}

impl<S: TreeStore + ?Sized> TreeStore for Box<S> {
    fn load(&self) -> Result<TreeDocument> {
        (**self).load()
    }

    fn save(&self, document: &TreeDocument) -> Result<TreeDocument> {
        (**self).save(document)
    }
}
