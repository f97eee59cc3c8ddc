//! Core family tree model and the immutable edits on it
//!
//! The tree is a strict forest below an asymmetric root: the root couple is
//! two plain names, everyone below is a [`Person`].

pub mod edit;
mod id;
mod person;

pub use id::{IdGenerator, PersonId, RandomIdGenerator, SequentialIdGenerator};
pub use person::{count_members, FamilyTree, Person, Walk, ROOT_COUPLE};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::edit::{
        add_child, add_spouse, delete_node, delete_spouse, find_and_update, toggle_collapse,
        update_name, update_spouse,
    };
    pub use super::{
        count_members, FamilyTree, IdGenerator, Person, PersonId, RandomIdGenerator,
        SequentialIdGenerator, ROOT_COUPLE,
    };
}
