use family_tree::prelude::*;
use family_tree::tree::edit::{set_father, set_mother};
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// F & M
/// ├── a (A, spouses s1 s2)
/// │   ├── b (B)
/// │   │   └── d (D)
/// │   └── c (C)
/// └── e (E)
fn sample() -> FamilyTree {
    FamilyTree::new("F", "M")
        .with_child(
            Person::new("a".into())
                .with_name("A")
                .with_spouse("s1")
                .with_spouse("s2")
                .with_child(
                    Person::new("b".into())
                        .with_name("B")
                        .with_child(Person::new("d".into()).with_name("D")),
                )
                .with_child(Person::new("c".into()).with_name("C")),
        )
        .with_child(Person::new("e".into()).with_name("E"))
}

#[test]
fn test_find_and_update_rebuilds_only_the_path() {
    let tree = sample();
    let updated = find_and_update(&tree, &"d".into(), |p| p.clone().with_name("Dee"));

    assert_eq!(updated.find(&"d".into()).unwrap().name, "Dee");

    // Ancestors of the target are new
    assert!(!Arc::ptr_eq(&tree.children[0], &updated.children[0]));
    assert!(!Arc::ptr_eq(
        &tree.children[0].children[0],
        &updated.children[0].children[0]
    ));

    // Siblings off the path are shared
    assert!(Arc::ptr_eq(&tree.children[1], &updated.children[1]));
    assert!(Arc::ptr_eq(
        &tree.children[0].children[1],
        &updated.children[0].children[1]
    ));

    // The input is untouched
    assert_eq!(tree.find(&"d".into()).unwrap().name, "D");
}

#[test]
fn test_find_and_update_missing_id_is_noop() {
    let tree = sample();
    let updated = find_and_update(&tree, &"nobody".into(), |p| p.clone().with_name("X"));

    assert_eq!(updated, tree);
}

#[test]
fn test_find_and_update_all_duplicates() {
    let tree = FamilyTree::new("F", "")
        .with_child(Person::new("dup".into()).with_name("one"))
        .with_child(Person::new("dup".into()).with_name("two"));

    let updated = update_name(&tree, &"dup".into(), "same");
    assert!(updated.children.iter().all(|p| p.name == "same"));
}

#[test]
fn test_delete_removes_subtree() {
    let tree = sample();
    let target = tree.find(&"b".into()).unwrap().clone();
    let removed = 1 + target.spouses.len() + count_members(&target.children);

    let updated = delete_node(&tree, &"b".into());

    assert!(!updated.contains(&"b".into()));
    assert!(!updated.contains(&"d".into()));
    assert!(updated.contains(&"c".into()));
    assert_eq!(
        count_members(&updated.children),
        count_members(&tree.children) - removed
    );
    assert!(Arc::ptr_eq(&tree.children[1], &updated.children[1]));
}

#[test]
fn test_delete_all_occurrences() {
    let tree = FamilyTree::new("F", "")
        .with_child(Person::new("x".into()))
        .with_child(Person::new("y".into()).with_child(Person::new("x".into())));

    let updated = delete_node(&tree, &"x".into());

    assert_eq!(updated.children.len(), 1);
    assert!(updated.children[0].children.is_empty());
}

#[test]
fn test_delete_missing_id_is_noop() {
    let tree = sample();
    assert_eq!(delete_node(&tree, &"nobody".into()), tree);
}

#[test]
fn test_add_child() {
    let tree = sample();
    let mut ids = SequentialIdGenerator::new("new");

    let updated = add_child(&tree, &"c".into(), &mut ids);
    let c = updated.find(&"c".into()).unwrap();

    assert_eq!(c.children.len(), 1);
    let child = &c.children[0];
    assert_eq!(child.id, PersonId::from("new-1"));
    assert_eq!(child.name, "");
    assert!(child.spouses.is_empty());
    assert!(!child.collapsed);

    // Appended after existing children
    let a = updated.find(&"a".into()).unwrap();
    assert_eq!(a.children.len(), 2);
    let updated = add_child(&updated, &"a".into(), &mut ids);
    let a = updated.find(&"a".into()).unwrap();
    assert_eq!(a.children.last().unwrap().id, PersonId::from("new-2"));
}

#[test]
fn test_add_child_to_missing_parent_consumes_no_id() {
    let tree = sample();
    let mut ids = SequentialIdGenerator::default();

    let updated = add_child(&tree, &"nobody".into(), &mut ids);

    assert_eq!(updated, tree);
    assert_eq!(ids.issued(), 0);
}

#[test]
fn test_spouse_edits() {
    let tree = sample();
    let id: PersonId = "e".into();

    let tree = add_spouse(&tree, &id);
    assert_eq!(tree.find(&id).unwrap().spouses, vec![String::new()]);

    let tree = update_spouse(&tree, &id, 0, "Fay");
    let tree = add_spouse(&tree, &id);
    let tree = update_spouse(&tree, &id, 1, "Gus");
    assert_eq!(
        tree.find(&id).unwrap().spouses,
        vec!["Fay".to_string(), "Gus".to_string()]
    );

    let tree = delete_spouse(&tree, &id, 0);
    assert_eq!(tree.find(&id).unwrap().spouses, vec!["Gus".to_string()]);
}

#[test]
fn test_spouse_index_out_of_bounds_is_noop() {
    let tree = sample();

    let updated = update_spouse(&tree, &"a".into(), 5, "Nope");
    assert_eq!(updated, tree);
    assert!(Arc::ptr_eq(&tree.children[0], &updated.children[0]));

    let updated = delete_spouse(&tree, &"a".into(), 2);
    assert_eq!(updated, tree);

    // Persons without spouses behave the same
    assert_eq!(delete_spouse(&tree, &"e".into(), 0), tree);
}

#[test]
fn test_duplicate_spouses_allowed() {
    let tree = sample();
    let id: PersonId = "e".into();

    let tree = update_spouse(&add_spouse(&tree, &id), &id, 0, "Sam");
    let tree = update_spouse(&add_spouse(&tree, &id), &id, 1, "Sam");

    assert_eq!(
        tree.find(&id).unwrap().spouses,
        vec!["Sam".to_string(), "Sam".to_string()]
    );
}

#[test]
fn test_toggle_collapse() {
    let tree = sample();
    assert!(!tree.find(&"a".into()).unwrap().collapsed);

    let once = toggle_collapse(&tree, &"a".into());
    assert!(once.find(&"a".into()).unwrap().collapsed);

    let twice = toggle_collapse(&once, &"a".into());
    assert_eq!(twice, tree);
}

#[test]
fn test_ids_survive_edits() {
    let tree = sample();
    let updated = update_name(&tree, &"a".into(), "Alpha");
    let updated = add_spouse(&updated, &"a".into());
    let updated = toggle_collapse(&updated, &"a".into());

    let before: Vec<PersonId> = tree.walk().map(|(_, p)| p.id.clone()).collect();
    let after: Vec<PersonId> = updated.walk().map(|(_, p)| p.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_root_couple_edits() {
    let tree = sample();

    let updated = set_mother(&set_father(&tree, "Father"), "Mother");

    assert_eq!(updated.father, "Father");
    assert_eq!(updated.mother, "Mother");
    assert!(Arc::ptr_eq(&tree.children[0], &updated.children[0]));
    assert_eq!(tree.father, "F");
}

#[test]
fn test_count_members_formula() {
    // root.children = [A(spouses=[s1, s2], children=[B])]
    let tree = FamilyTree::new("F", "M").with_child(
        Person::new("a".into())
            .with_spouse("s1")
            .with_spouse("s2")
            .with_child(Person::new("b".into())),
    );

    assert_eq!(count_members(&tree.children), 4);
    assert_eq!(tree.total_members(), 6);
}
