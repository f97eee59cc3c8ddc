// Export library for family trees
// This crate flattens a tree into leveled tables and writes them as workbooks

mod palette;
mod rows;
mod sheet;
mod sink;
mod workbook;

pub use palette::{
    column_color, contrast_color, Rgb, TextColor, FALLBACK_BACKGROUND, HEADER_BACKGROUND, PALETTE,
};
pub use rows::{build_rows_by_levels, level_headers, node_label, root_label, tree_rows, LevelTable};
pub use sheet::{
    build_sheet, column_width, merge_runs, Column, MergeRange, Sheet, MAX_COLUMN_WIDTH,
    MIN_COLUMN_WIDTH,
};
pub use sink::{export_tree, ExportSink, MemorySink, XlsxBufferSink, XlsxFileSink, DEFAULT_FILE_NAME};
pub use workbook::{level_sheet_name, Workbook, FULL_SHEET_NAME};
