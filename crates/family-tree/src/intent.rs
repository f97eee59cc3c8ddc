//! Edit intents and the reducer that applies them

use derive_more::Display;

use crate::tree::edit;
use crate::tree::{FamilyTree, IdGenerator, PersonId};

/// The closed set of edits a UI can request
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EditIntent {
    /// Replace the whole tree
    #[display(fmt = "set-tree")]
    SetTree(FamilyTree),

    /// Rename a person
    #[display(fmt = "update-name({}, {:?})", id, name)]
    UpdateName { id: PersonId, name: String },

    /// Append an empty child to a person
    #[display(fmt = "add-child({})", id)]
    AddChild { id: PersonId },

    /// Remove a person and their subtree
    #[display(fmt = "delete-node({})", id)]
    DeleteNode { id: PersonId },

    /// Fold or unfold a person's subtree
    #[display(fmt = "toggle-collapse({})", id)]
    ToggleCollapse { id: PersonId },

    /// Append an empty spouse entry
    #[display(fmt = "add-spouse({})", id)]
    AddSpouse { id: PersonId },

    /// Rename the spouse at `index`
    #[display(fmt = "update-spouse({}, {}, {:?})", id, index, name)]
    UpdateSpouse {
        id: PersonId,
        index: usize,
        name: String,
    },

    /// Remove the spouse at `index`
    #[display(fmt = "delete-spouse({}, {})", id, index)]
    DeleteSpouse { id: PersonId, index: usize },

    /// Rename the root father
    #[display(fmt = "update-father({:?})", _0)]
    UpdateFather(String),

    /// Rename the root mother
    #[display(fmt = "update-mother({:?})", _0)]
    UpdateMother(String),
}

impl EditIntent {
    /// Compute the tree that results from applying this intent to `tree`
    pub fn apply<G>(self, tree: &FamilyTree, ids: &mut G) -> FamilyTree
    where
        G: IdGenerator + ?Sized,
    {
        match self {
            EditIntent::SetTree(next) => next,
            EditIntent::UpdateName { id, name } => edit::update_name(tree, &id, &name),
            EditIntent::AddChild { id } => edit::add_child(tree, &id, ids),
            EditIntent::DeleteNode { id } => edit::delete_node(tree, &id),
            EditIntent::ToggleCollapse { id } => edit::toggle_collapse(tree, &id),
            EditIntent::AddSpouse { id } => edit::add_spouse(tree, &id),
            EditIntent::UpdateSpouse { id, index, name } => {
                edit::update_spouse(tree, &id, index, &name)
            }
            EditIntent::DeleteSpouse { id, index } => edit::delete_spouse(tree, &id, index),
            EditIntent::UpdateFather(name) => edit::set_father(tree, &name),
            EditIntent::UpdateMother(name) => edit::set_mother(tree, &name),
        }
    }

    /// The person this intent targets, if any
    pub fn target(&self) -> Option<&PersonId> {
        match self {
            EditIntent::UpdateName { id, .. }
            | EditIntent::AddChild { id }
            | EditIntent::DeleteNode { id }
            | EditIntent::ToggleCollapse { id }
            | EditIntent::AddSpouse { id }
            | EditIntent::UpdateSpouse { id, .. }
            | EditIntent::DeleteSpouse { id, .. } => Some(id),
            EditIntent::SetTree(_) | EditIntent::UpdateFather(_) | EditIntent::UpdateMother(_) => {
                None
            }
        }
    }
}
