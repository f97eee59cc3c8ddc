use family_tree::prelude::*;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    // Mixed legacy and structured children, as found in older stored trees
    let document = TreeDocument::new(json!({
        "father": "Joseph",
        "mother": "Mary",
        "children": [
            "Anna",
            {"id": "karl", "name": "Karl", "spouses": ["Eva"], "children": ["Lena"]}
        ]
    }));

    let mut session = EditSession::new();
    session.load(&document);
    if let Some(tree) = session.tree() {
        println!("{}", render_outline(tree, &OutlineOptions::new()));
    }

    session.dispatch(EditIntent::AddChild { id: "karl".into() });
    session.dispatch(EditIntent::ToggleCollapse { id: "karl".into() });
    session.dispatch(EditIntent::UpdateSpouse {
        id: "karl".into(),
        index: 0,
        name: "Eva Maria".into(),
    });

    if let Some(tree) = session.tree() {
        println!("{}", render_outline(tree, &OutlineOptions::new().show_ids(false)));
    }

    if let Some(document) = session.document() {
        println!("{}", document.to_json_pretty()?);
    }

    Ok(())
}
