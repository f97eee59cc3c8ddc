use family_tree::prelude::*;
use pretty_assertions::assert_eq;
use tree_export::{build_rows_by_levels, level_headers, node_label, root_label, tree_rows, LevelTable};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// F-M
/// ├── C1-S1
/// │   ├── G1
/// │   └── G2
/// └── C2
fn sample() -> FamilyTree {
    FamilyTree::new("F", "M")
        .with_child(
            Person::new("c1".into())
                .with_name("C1")
                .with_spouse("S1")
                .with_child(Person::new("g1".into()).with_name("G1"))
                .with_child(Person::new("g2".into()).with_name("G2")),
        )
        .with_child(Person::new("c2".into()).with_name("C2"))
}

#[test]
fn test_labels() {
    assert_eq!(root_label(&FamilyTree::new("F", "M")), "F-M");
    assert_eq!(root_label(&FamilyTree::new("F", "")), "F");

    let person = Person::new("x".into())
        .with_name("Ann")
        .with_spouse("Bob")
        .with_spouse("Carl");
    assert_eq!(node_label(&person), "Ann-Bob-Carl");

    // Empty spouse names still take a slot
    let person = Person::new("y".into()).with_name("Ann").with_spouse("");
    assert_eq!(node_label(&person), "Ann-");
}

#[test]
fn test_rows_follow_every_leaf() {
    let rows = tree_rows(&sample());

    assert_eq!(
        rows,
        vec![
            row(&["F-M", "C1-S1", "G1"]),
            row(&["F-M", "C1-S1", "G2"]),
            row(&["F-M", "C2"]),
        ]
    );
}

#[test]
fn test_rows_with_custom_prefix() {
    let tree = sample();
    let rows = build_rows_by_levels(&tree.children[0].children, &row(&["X"]));

    assert_eq!(rows, vec![row(&["X", "G1"]), row(&["X", "G2"])]);
    assert!(build_rows_by_levels(&[], &row(&["X"])).is_empty());
}

#[test]
fn test_childless_tree_is_a_single_row() {
    let tree = FamilyTree::new("F", "M");
    assert_eq!(tree_rows(&tree), vec![row(&["F-M"])]);

    let table = LevelTable::from_tree(&tree);
    assert_eq!(table.max_depth(), 1);
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_table_pads_to_deepest_path() {
    let table = LevelTable::from_tree(&sample());

    assert_eq!(table.max_depth(), 3);
    assert_eq!(table.rows()[2], row(&["F-M", "C2", ""]));
    assert!(table.rows().iter().all(|r| r.len() == 3));

    assert_eq!(
        table.truncated(2),
        vec![row(&["G1"]), row(&["G2"]), row(&[""])]
    );
}

#[test]
fn test_empty_rows_still_have_one_column() {
    let table = LevelTable::from_rows(Vec::new());
    assert_eq!(table.max_depth(), 1);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_level_headers() {
    assert_eq!(level_headers(3, 0), row(&["Level 0", "Level 1", "Level 2"]));
    assert_eq!(level_headers(2, 1), row(&["Level 1", "Level 2"]));
    assert!(level_headers(0, 1).is_empty());
}
