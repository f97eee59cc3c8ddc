use anyhow::Result;
use family_tree::prelude::*;
use serde_json::json;
use tree_export::{export_tree, XlsxFileSink, DEFAULT_FILE_NAME};

fn main() -> Result<()> {
    // A small tree in the stored format, legacy string children included
    let document = TreeDocument::new(json!({
        "father": "Joseph",
        "mother": "Mary",
        "children": [
            {
                "name": "Anna",
                "spouses": ["Peter"],
                "children": ["Lena", "Tom"]
            },
            "Karl"
        ]
    }));
    let tree = document.normalize(&mut SequentialIdGenerator::default());

    let path = std::env::temp_dir().join(DEFAULT_FILE_NAME);
    let mut sink = XlsxFileSink::new(&path);
    let workbook = export_tree(Some(&tree), &mut sink)?;

    println!("Wrote {}", path.display());
    for sheet in workbook.sheets() {
        println!(
            "  {}: {} column(s), {} row(s), {} merge(s)",
            sheet.name,
            sheet.column_count(),
            sheet.row_count(),
            sheet.merges.len()
        );
        for row in &sheet.rows {
            println!("    {}", row.join(" | "));
        }
    }

    Ok(())
}
