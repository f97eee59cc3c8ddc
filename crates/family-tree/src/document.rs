//! The stored/wire form of a tree

use crate::normalize::normalize;
use crate::tree::{FamilyTree, IdGenerator, Person};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A tree exactly as a persistence collaborator stores it
///
/// The document may be any JSON value: older data uses plain strings for
/// children and omits fields. [`TreeDocument::normalize`] turns it into a
/// canonical [`FamilyTree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeDocument(Value);

impl TreeDocument {
    /// Wrap an arbitrary JSON value
    pub fn new(value: Value) -> Self {
        TreeDocument(value)
    }

    /// The document a store creates when nothing has been saved yet
    pub fn empty() -> Self {
        TreeDocument(json!({
            "father": "",
            "mother": "",
            "children": [],
        }))
    }

    /// Parse a document from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value = serde_json::from_str(text).context("Failed to parse tree document")?;
        Ok(TreeDocument(value))
    }

    /// Render the document as indented JSON text
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.0).context("Failed to encode tree document")
    }

    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the document and return the JSON value
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Build the canonical tree, generating ids where they are missing
    pub fn normalize<G>(&self, ids: &mut G) -> FamilyTree
    where
        G: IdGenerator + ?Sized,
    {
        normalize(&self.0, ids)
    }
}

impl From<Value> for TreeDocument {
    fn from(value: Value) -> Self {
        TreeDocument(value)
    }
}

impl From<&FamilyTree> for TreeDocument {
    fn from(tree: &FamilyTree) -> Self {
        TreeDocument(json!({
            "father": tree.father,
            "mother": tree.mother,
            "children": tree.children.iter().map(|child| person_value(child)).collect::<Vec<_>>(),
        }))
    }
}

fn person_value(person: &Person) -> Value {
    json!({
        "id": person.id.as_str(),
        "name": person.name,
        "spouses": person.spouses,
        "children": person.children.iter().map(|child| person_value(child)).collect::<Vec<_>>(),
        "collapsed": person.collapsed,
    })
}
