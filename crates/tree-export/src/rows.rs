use std::sync::Arc;

use family_tree::tree::{FamilyTree, Person};

/// Label of the root couple: `father`, or `father-mother` when a mother is named
pub fn root_label(tree: &FamilyTree) -> String {
    if tree.mother.is_empty() {
        tree.father.clone()
    } else {
        format!("{}-{}", tree.father, tree.mother)
    }
}

/// Label of one person: the name followed by every spouse, joined with `-`
pub fn node_label(person: &Person) -> String {
    if person.spouses.is_empty() {
        return person.name.clone();
    }

    let mut label = person.name.clone();
    for spouse in &person.spouses {
        label.push('-');
        label.push_str(spouse);
    }
    label
}

/// Collect one row per leaf: the labels on the path from `prefix` down to it
pub fn build_rows_by_levels(nodes: &[Arc<Person>], prefix: &[String]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut path = prefix.to_vec();
    collect_rows(nodes, &mut path, &mut rows);
    rows
}

fn collect_rows(nodes: &[Arc<Person>], path: &mut Vec<String>, rows: &mut Vec<Vec<String>>) {
    for node in nodes {
        path.push(node_label(node));
        if node.children.is_empty() {
            rows.push(path.clone());
        } else {
            collect_rows(&node.children, path, rows);
        }
        path.pop();
    }
}

/// Root-to-leaf rows for a whole tree, starting at the root couple
///
/// A tree without children yields the single row `[root_label]`.
pub fn tree_rows(tree: &FamilyTree) -> Vec<Vec<String>> {
    let root = root_label(tree);
    if tree.children.is_empty() {
        return vec![vec![root]];
    }
    build_rows_by_levels(&tree.children, &[root])
}

/// `count` headers named `Level <first>`, `Level <first + 1>`, ...
pub fn level_headers(count: usize, first: usize) -> Vec<String> {
    (first..first + count)
        .map(|level| format!("Level {level}"))
        .collect()
}

/// Rectangular rows: every row padded with empty cells to the deepest path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    rows: Vec<Vec<String>>,
    max_depth: usize,
}

impl LevelTable {
    /// Flatten a whole tree
    pub fn from_tree(tree: &FamilyTree) -> Self {
        Self::from_rows(tree_rows(tree))
    }

    /// Pad variable-length rows to a common width (at least one column)
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let max_depth = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(max_depth, String::new());
                row
            })
            .collect();

        Self { rows, max_depth }
    }

    /// Number of columns
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The padded rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Every row with its first `skip` columns dropped
    pub fn truncated(&self, skip: usize) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().skip(skip).cloned().collect())
            .collect()
    }
}
