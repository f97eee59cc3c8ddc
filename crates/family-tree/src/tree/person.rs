//! The canonical family tree model

use crate::tree::PersonId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Number of people represented by the root couple (father and mother)
pub const ROOT_COUPLE: usize = 2;

/// A single person in the tree
///
/// Children are held behind [`Arc`] so that edits can rebuild the path to a
/// changed node while sharing every untouched subtree with the previous tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable identifier, never rewritten by edits
    pub id: PersonId,
    /// Display name (may be empty)
    pub name: String,
    /// Spouse display names in insertion order
    pub spouses: Vec<String>,
    /// Direct descendants, owned by this person only
    pub children: Vec<Arc<Person>>,
    /// Whether the subtree is folded away in the UI
    pub collapsed: bool,
}

impl Person {
    /// Create an empty, expanded person as produced by an "add child" edit
    pub fn new(id: PersonId) -> Self {
        Self {
            id,
            name: String::new(),
            spouses: Vec::new(),
            children: Vec::new(),
            collapsed: false,
        }
    }

    /// Create a name-only person as loaded from a legacy plain-string entry
    pub fn legacy(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            spouses: Vec::new(),
            children: Vec::new(),
            collapsed: true,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a spouse
    pub fn with_spouse(mut self, spouse: impl Into<String>) -> Self {
        self.spouses.push(spouse.into());
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: Person) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Set the collapsed flag
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Copy this person's own fields onto a new child list
    pub fn rebuilt_with(&self, children: Vec<Arc<Person>>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            spouses: self.spouses.clone(),
            children,
            collapsed: self.collapsed,
        }
    }

    /// Returns true if this person has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// People counted for this node: itself, its spouses and all descendants
    /// with their spouses
    pub fn member_count(&self) -> usize {
        1 + self.spouses.len() + count_members(&self.children)
    }
}

/// Sum of [`Person::member_count`] over a list of siblings
pub fn count_members(nodes: &[Arc<Person>]) -> usize {
    nodes.iter().map(|node| node.member_count()).sum()
}

/// The whole tree: the root couple and their descendants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyTree {
    /// Root father's name
    pub father: String,
    /// Root mother's name
    pub mother: String,
    /// The root couple's children
    pub children: Vec<Arc<Person>>,
}

impl FamilyTree {
    /// Create a tree with the given root couple and no children
    pub fn new(father: impl Into<String>, mother: impl Into<String>) -> Self {
        Self {
            father: father.into(),
            mother: mother.into(),
            children: Vec::new(),
        }
    }

    /// Append a child of the root couple
    pub fn with_child(mut self, child: Person) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Copy the root couple onto a new child list
    pub fn rebuilt_with(&self, children: Vec<Arc<Person>>) -> Self {
        Self {
            father: self.father.clone(),
            mother: self.mother.clone(),
            children,
        }
    }

    /// Find the first person (pre-order) with the given id
    pub fn find(&self, id: &PersonId) -> Option<&Person> {
        self.walk()
            .find(|(_, person)| person.id == *id)
            .map(|(_, person)| person)
    }

    /// Check whether a person with the given id exists
    pub fn contains(&self, id: &PersonId) -> bool {
        self.find(id).is_some()
    }

    /// Walk every person in pre-order together with its generation
    /// (the root couple's children are generation 1)
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.children)
    }

    /// Number of generations below the root couple (0 for an empty tree)
    pub fn depth(&self) -> usize {
        self.walk()
            .map(|(generation, _)| generation)
            .max()
            .unwrap_or(0)
    }

    /// Number of people below the root couple, spouses included
    pub fn descendant_count(&self) -> usize {
        count_members(&self.children)
    }

    /// Displayed total: the root couple plus every descendant and spouse
    pub fn total_members(&self) -> usize {
        ROOT_COUPLE + self.descendant_count()
    }

    /// Returns true if the root couple has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Pre-order iterator over the people of a tree
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Person)>,
}

impl<'a> Walk<'a> {
    fn new(roots: &'a [Arc<Person>]) -> Self {
        // Push in reverse so the first child is popped first
        let stack = roots.iter().rev().map(|node| (1, node.as_ref())).collect();
        Self { stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Person);

    fn next(&mut self) -> Option<Self::Item> {
        let (generation, current) = self.stack.pop()?;

        for child in current.children.iter().rev() {
            self.stack.push((generation + 1, child.as_ref()));
        }

        Some((generation, current))
    }
}
