use family_tree::tree::FamilyTree;

use crate::palette::PALETTE;
use crate::rows::{level_headers, LevelTable};
use crate::sheet::{build_sheet, Sheet};

/// Name of the sheet holding the full path table
pub const FULL_SHEET_NAME: &str = "FamilyTree";

/// Name of the sheet that restarts the hierarchy at generation `level`
pub fn level_sheet_name(level: usize) -> String {
    format!("FromLevel{level}")
}

/// Every leveled view of a tree, in sheet order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Flatten a tree and build the full sheet plus one sheet per level
    pub fn from_tree(tree: &FamilyTree) -> Self {
        Self::from_table(&LevelTable::from_tree(tree), &PALETTE)
    }

    /// Build the sheets for an already flattened table
    ///
    /// Sheet `FromLevel{k}` drops the first `k` columns of every row and
    /// numbers the remaining levels from 1.
    pub fn from_table(table: &LevelTable, palette: &[&str]) -> Self {
        let max_depth = table.max_depth();
        let mut sheets = Vec::with_capacity(max_depth);

        sheets.push(build_sheet(
            FULL_SHEET_NAME,
            table.rows().to_vec(),
            level_headers(max_depth, 0),
            palette,
        ));

        for level in 1..max_depth {
            sheets.push(build_sheet(
                level_sheet_name(level),
                table.truncated(level),
                level_headers(max_depth - level, 1),
                palette,
            ));
        }

        Self { sheets }
    }

    /// The sheets in order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Look up a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}
