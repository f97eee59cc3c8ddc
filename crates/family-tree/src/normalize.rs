//! Loosely-typed input to canonical tree
//!
//! Stored documents come in several shapes: children may be plain strings
//! (a name and nothing else), fields may be missing or hold the wrong type,
//! and document stores add fields of their own. Those shapes are read here
//! straight off the JSON value; everything else sees [`Person`] and
//! [`FamilyTree`].

use crate::tree::{FamilyTree, IdGenerator, Person, PersonId};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Build a canonical tree from any JSON value
///
/// Never fails: a value that is not an object yields an empty tree with an
/// unnamed root couple. Ids already present are kept; missing or empty ids
/// are drawn from `ids`. Each input node is visited once.
pub fn normalize<G>(value: &Value, ids: &mut G) -> FamilyTree
where
    G: IdGenerator + ?Sized,
{
    let Some(fields) = value.as_object() else {
        return FamilyTree::default();
    };

    FamilyTree {
        father: string_field(fields, "father").unwrap_or_default(),
        mother: string_field(fields, "mother").unwrap_or_default(),
        children: resolve_children(fields, ids),
    }
}

/// A string field; a wrong type counts as missing
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn resolve_children<G>(fields: &Map<String, Value>, ids: &mut G) -> Vec<Arc<Person>>
where
    G: IdGenerator + ?Sized,
{
    let Some(nodes) = fields.get("children").and_then(Value::as_array) else {
        return Vec::new();
    };

    nodes
        .iter()
        .map(|node| Arc::new(resolve(node, ids)))
        .collect()
}

fn resolve<G>(node: &Value, ids: &mut G) -> Person
where
    G: IdGenerator + ?Sized,
{
    match node {
        // Legacy shorthand: just the person's name
        Value::String(name) => Person::legacy(ids.next_id(), name.clone()),
        Value::Object(fields) => resolve_person(fields, ids),
        // Numbers, null, nested arrays
        _ => resolve_person(&Map::new(), ids),
    }
}

fn resolve_person<G>(fields: &Map<String, Value>, ids: &mut G) -> Person
where
    G: IdGenerator + ?Sized,
{
    let id = match string_field(fields, "id").filter(|id| !id.is_empty()) {
        Some(id) => PersonId::new(id),
        None => ids.next_id(),
    };
    let spouses = fields
        .get("spouses")
        .and_then(Value::as_array)
        .map(|spouses| {
            spouses
                .iter()
                .map(|spouse| spouse.as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default();

    Person {
        id,
        name: string_field(fields, "name").unwrap_or_default(),
        spouses,
        children: resolve_children(fields, ids),
        collapsed: fields
            .get("collapsed")
            .and_then(Value::as_bool)
            .unwrap_or(true),
    }
}
