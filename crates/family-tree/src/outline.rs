//! Indented text view of a tree

use std::fmt::Write;

use crate::tree::{FamilyTree, Person};

const INDENT: &str = "  ";

/// Options controlling how much of the tree is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Deepest generation whose children are listed; deeper levels are
    /// summarised as a `+N more` badge
    pub max_depth: Option<usize>,

    /// Whether each line ends with the person's id
    pub show_ids: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_ids: true,
        }
    }
}

impl OutlineOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of generations rendered
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Show or hide person ids
    pub fn show_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }
}

/// Render the tree as one line per visible person
///
/// The first line names the root couple and the total member count. Each
/// person line starts with `+` when collapsed or `-` when expanded; collapsed
/// people hide their descendants.
pub fn render_outline(tree: &FamilyTree, options: &OutlineOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (total members: {})",
        root_title(tree),
        tree.total_members()
    );

    for child in &tree.children {
        render_person(&mut out, child, 1, options);
    }

    out
}

fn root_title(tree: &FamilyTree) -> String {
    let names: Vec<&str> = [tree.father.as_str(), tree.mother.as_str()]
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        "Unnamed".to_string()
    } else {
        names.join(" & ")
    }
}

fn render_person(out: &mut String, person: &Person, generation: usize, options: &OutlineOptions) {
    let indent = INDENT.repeat(generation - 1);
    let marker = if person.collapsed { '+' } else { '-' };
    let name = if person.name.is_empty() {
        "Unnamed"
    } else {
        person.name.as_str()
    };

    let _ = write!(out, "{indent}{marker} {name}");
    if !person.spouses.is_empty() {
        let spouses: Vec<&str> = person
            .spouses
            .iter()
            .map(|spouse| if spouse.is_empty() { "Partner" } else { spouse.as_str() })
            .collect();
        let _ = write!(out, " ({})", spouses.join(", "));
    }
    let _ = write!(out, " [{}]", person.member_count());
    if options.show_ids {
        let _ = write!(out, " #{}", person.id);
    }
    out.push('\n');

    if person.collapsed || person.children.is_empty() {
        return;
    }

    let within_limit = options.max_depth.map_or(true, |max| generation < max);
    if within_limit {
        for child in &person.children {
            render_person(out, child, generation + 1, options);
        }
    } else {
        let _ = writeln!(out, "{indent}{INDENT}+{} more", person.children.len());
    }
}
