//! Family Tree Engine
//!
//! An in-memory model of a family tree together with the pure operations
//! that load, query and edit it.
//!
//! # Core Concepts
//!
//! - **FamilyTree**: the root couple (two names) and their descendants
//! - **Person**: one node with a name, spouses, children and a collapsed flag
//! - **TreeDocument**: the stored JSON form, normalized into a `FamilyTree`
//! - **EditIntent**: the closed set of edits, applied by a reducer
//! - **EditSession**: the single owner of the tree being edited
//!
//! # Example
//!
//! ```
//! use family_tree::prelude::*;
//! use serde_json::json;
//!
//! let document = TreeDocument::new(json!({
//!     "father": "F",
//!     "mother": "M",
//!     "children": ["Ann"],
//! }));
//!
//! let mut session = EditSession::with_id_generator(SequentialIdGenerator::default());
//! session.load(&document);
//! session.dispatch(EditIntent::AddSpouse { id: "n-1".into() });
//!
//! assert_eq!(session.total_members(), 4);
//! ```

pub mod document;
pub mod intent;
mod normalize;
pub mod outline;
pub mod session;
pub mod tree;

pub use document::TreeDocument;
pub use intent::EditIntent;
pub use normalize::normalize;
pub use outline::{render_outline, OutlineOptions};
pub use session::EditSession;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::document::TreeDocument;
    pub use crate::intent::EditIntent;
    pub use crate::outline::{render_outline, OutlineOptions};
    pub use crate::session::EditSession;
    pub use crate::tree::prelude::*;
}
