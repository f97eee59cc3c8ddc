use family_tree::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn loaded_session() -> EditSession<SequentialIdGenerator> {
    let mut session = EditSession::with_id_generator(SequentialIdGenerator::default());
    session.load(&TreeDocument::new(json!({
        "father": "F",
        "mother": "M",
        "children": [
            { "id": "a", "name": "A", "spouses": ["S"], "children": ["B"], "collapsed": false }
        ]
    })));
    session
}

#[test]
fn test_unloaded_session() {
    let session = EditSession::with_id_generator(SequentialIdGenerator::default());

    assert!(!session.is_loaded());
    assert!(session.tree().is_none());
    assert!(session.document().is_none());
    assert_eq!(session.total_members(), 2);
}

#[test]
fn test_dispatch_before_load_edits_an_empty_tree() {
    let mut session = EditSession::with_id_generator(SequentialIdGenerator::default());

    assert!(session.dispatch(EditIntent::UpdateFather("F".into())));
    assert_eq!(session.tree().unwrap().father, "F");
    assert!(session.is_dirty());
}

#[test]
fn test_load_replaces_tree_and_clears_dirty() {
    let mut session = loaded_session();
    assert!(session.is_loaded());
    assert!(!session.is_dirty());
    // F, M, A, S, B
    assert_eq!(session.total_members(), 5);

    session.dispatch(EditIntent::UpdateMother("Other".into()));
    assert!(session.is_dirty());

    session.load(&TreeDocument::empty());
    assert!(!session.is_dirty());
    assert_eq!(session.tree(), Some(&FamilyTree::default()));
}

#[test]
fn test_every_intent() {
    let mut session = loaded_session();
    let a: PersonId = "a".into();

    assert!(session.dispatch(EditIntent::UpdateName {
        id: a.clone(),
        name: "Alpha".into()
    }));
    assert!(session.dispatch(EditIntent::AddChild { id: a.clone() }));
    assert!(session.dispatch(EditIntent::AddSpouse { id: a.clone() }));
    assert!(session.dispatch(EditIntent::UpdateSpouse {
        id: a.clone(),
        index: 1,
        name: "T".into()
    }));
    assert!(session.dispatch(EditIntent::DeleteSpouse {
        id: a.clone(),
        index: 0
    }));
    assert!(session.dispatch(EditIntent::ToggleCollapse { id: a.clone() }));
    assert!(session.dispatch(EditIntent::UpdateFather("Father".into())));
    assert!(session.dispatch(EditIntent::UpdateMother("Mother".into())));

    let tree = session.tree().unwrap();
    let alpha = tree.find(&a).unwrap();
    assert_eq!(alpha.name, "Alpha");
    assert_eq!(alpha.spouses, vec!["T".to_string()]);
    assert!(alpha.collapsed);
    // B was normalized as n-1, the new child is n-2
    let child_ids: Vec<&str> = alpha.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(child_ids, vec!["n-1", "n-2"]);
    assert_eq!(tree.father, "Father");
    assert_eq!(tree.mother, "Mother");

    assert!(session.dispatch(EditIntent::DeleteNode { id: "n-1".into() }));
    assert!(!session.tree().unwrap().contains(&"n-1".into()));

    assert!(session.dispatch(EditIntent::SetTree(FamilyTree::new("X", "Y"))));
    assert_eq!(session.tree(), Some(&FamilyTree::new("X", "Y")));
}

#[test]
fn test_noop_intents_report_no_change() {
    let mut session = loaded_session();

    assert!(!session.dispatch(EditIntent::DeleteNode {
        id: "nobody".into()
    }));
    assert!(!session.dispatch(EditIntent::UpdateSpouse {
        id: "a".into(),
        index: 9,
        name: "Z".into()
    }));
    assert!(!session.dispatch(EditIntent::UpdateFather("F".into())));
    assert!(!session.is_dirty());
}

#[test]
fn test_mark_saved_adopts_echo() {
    let mut session = loaded_session();
    session.dispatch(EditIntent::UpdateName {
        id: "a".into(),
        name: "Local".into(),
    });

    let echoed = TreeDocument::new(json!({ "father": "Server", "children": [] }));
    session.mark_saved(&echoed);

    assert!(!session.is_dirty());
    assert_eq!(session.tree().unwrap().father, "Server");
    assert_eq!(session.total_members(), 2);
}

#[test]
fn test_document_reflects_current_tree() {
    let session = loaded_session();
    let document = session.document().unwrap();

    assert_eq!(document.as_value()["children"][0]["id"], "a");
    assert_eq!(document.as_value()["children"][0]["children"][0]["name"], "B");
    assert_eq!(document.as_value()["children"][0]["children"][0]["collapsed"], true);
}

#[test]
fn test_intent_display_and_target() {
    let intent = EditIntent::UpdateSpouse {
        id: "a".into(),
        index: 2,
        name: "Kim".into(),
    };
    assert_eq!(intent.to_string(), r#"update-spouse(a, 2, "Kim")"#);
    assert_eq!(intent.target(), Some(&PersonId::from("a")));

    let intent = EditIntent::UpdateFather("F".into());
    assert_eq!(intent.to_string(), r#"update-father("F")"#);
    assert_eq!(intent.target(), None);
}

#[test]
fn test_import_mints_ids_from_the_session() {
    let mut session = loaded_session();
    assert!(!session.is_dirty());

    // "B" took n-1 during load
    assert!(session.import(&TreeDocument::new(json!({"father": "P", "children": ["Q"]}))));

    let tree = session.tree().unwrap();
    assert_eq!(tree.father, "P");
    assert_eq!(tree.children[0].id, PersonId::from("n-2"));
    assert!(session.is_dirty());
}
