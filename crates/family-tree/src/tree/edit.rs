//! Immutable edits on a [`FamilyTree`]
//!
//! Every operation returns a new tree. Only the people on the path from the
//! root to an edited node are rebuilt; all other subtrees are shared with the
//! input through their [`Arc`]. Edits that target an unknown id are no-ops.

use crate::tree::{FamilyTree, IdGenerator, Person, PersonId};
use std::sync::Arc;

/// Replace every person whose id equals `target` with `updater(person)`
///
/// A matched person's own subtree is not searched further; the updater owns
/// what happens below it.
pub fn find_and_update<F>(tree: &FamilyTree, target: &PersonId, updater: F) -> FamilyTree
where
    F: Fn(&Person) -> Person,
{
    match update_nodes(&tree.children, target, &updater) {
        Some(children) => tree.rebuilt_with(children),
        None => tree.clone(),
    }
}

/// Rebuild `nodes` if any of them (or a descendant) matches, otherwise `None`
fn update_nodes<F>(nodes: &[Arc<Person>], target: &PersonId, updater: &F) -> Option<Vec<Arc<Person>>>
where
    F: Fn(&Person) -> Person,
{
    let mut changed = false;
    let rebuilt: Vec<Arc<Person>> = nodes
        .iter()
        .map(|node| {
            if node.id == *target {
                changed = true;
                Arc::new(updater(node))
            } else if let Some(children) = update_nodes(&node.children, target, updater) {
                changed = true;
                Arc::new(node.rebuilt_with(children))
            } else {
                Arc::clone(node)
            }
        })
        .collect();

    changed.then_some(rebuilt)
}

/// Remove every person with id `target`, together with their subtree
///
/// The root couple is never affected.
pub fn delete_node(tree: &FamilyTree, target: &PersonId) -> FamilyTree {
    match delete_nodes(&tree.children, target) {
        Some(children) => tree.rebuilt_with(children),
        None => tree.clone(),
    }
}

fn delete_nodes(nodes: &[Arc<Person>], target: &PersonId) -> Option<Vec<Arc<Person>>> {
    let mut changed = false;
    let kept: Vec<Arc<Person>> = nodes
        .iter()
        .filter_map(|node| {
            if node.id == *target {
                changed = true;
                return None;
            }
            match delete_nodes(&node.children, target) {
                Some(children) => {
                    changed = true;
                    Some(Arc::new(node.rebuilt_with(children)))
                }
                None => Some(Arc::clone(node)),
            }
        })
        .collect();

    changed.then_some(kept)
}

/// Rename a person
pub fn update_name(tree: &FamilyTree, id: &PersonId, name: &str) -> FamilyTree {
    find_and_update(tree, id, |person| Person {
        name: name.to_string(),
        ..person.clone()
    })
}

/// Append a fresh, empty, expanded child to a person
///
/// No id is consumed when the parent does not exist.
pub fn add_child<G>(tree: &FamilyTree, parent: &PersonId, ids: &mut G) -> FamilyTree
where
    G: IdGenerator + ?Sized,
{
    if !tree.contains(parent) {
        return tree.clone();
    }

    let child = Arc::new(Person::new(ids.next_id()));
    find_and_update(tree, parent, |person| {
        let mut children = person.children.clone();
        children.push(Arc::clone(&child));
        person.rebuilt_with(children)
    })
}

/// Flip a person's collapsed flag
pub fn toggle_collapse(tree: &FamilyTree, id: &PersonId) -> FamilyTree {
    find_and_update(tree, id, |person| Person {
        collapsed: !person.collapsed,
        ..person.clone()
    })
}

/// Append an empty spouse entry
pub fn add_spouse(tree: &FamilyTree, id: &PersonId) -> FamilyTree {
    find_and_update(tree, id, |person| {
        let mut spouses = person.spouses.clone();
        spouses.push(String::new());
        Person {
            spouses,
            ..person.clone()
        }
    })
}

/// Replace the spouse at `index`; out-of-range indices leave the tree as is
pub fn update_spouse(tree: &FamilyTree, id: &PersonId, index: usize, name: &str) -> FamilyTree {
    if !has_spouse_at(tree, id, index) {
        return tree.clone();
    }

    find_and_update(tree, id, |person| {
        let mut spouses = person.spouses.clone();
        if let Some(slot) = spouses.get_mut(index) {
            *slot = name.to_string();
        }
        Person {
            spouses,
            ..person.clone()
        }
    })
}

/// Remove the spouse at `index`; out-of-range indices leave the tree as is
pub fn delete_spouse(tree: &FamilyTree, id: &PersonId, index: usize) -> FamilyTree {
    if !has_spouse_at(tree, id, index) {
        return tree.clone();
    }

    find_and_update(tree, id, |person| {
        let mut spouses = person.spouses.clone();
        if index < spouses.len() {
            spouses.remove(index);
        }
        Person {
            spouses,
            ..person.clone()
        }
    })
}

fn has_spouse_at(tree: &FamilyTree, id: &PersonId, index: usize) -> bool {
    tree.find(id)
        .map(|person| index < person.spouses.len())
        .unwrap_or(false)
}

/// Rename the root father
pub fn set_father(tree: &FamilyTree, name: &str) -> FamilyTree {
    FamilyTree {
        father: name.to_string(),
        ..tree.clone()
    }
}

/// Rename the root mother
pub fn set_mother(tree: &FamilyTree, name: &str) -> FamilyTree {
    FamilyTree {
        mother: name.to_string(),
        ..tree.clone()
    }
}
