use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use family_tree::tree::FamilyTree;
use log::{debug, info};
use rust_xlsxwriter as xlsx;

use crate::palette::{Rgb, HEADER_BACKGROUND};
use crate::sheet::{Column, Sheet};
use crate::workbook::Workbook;

/// File name offered for a downloaded export
pub const DEFAULT_FILE_NAME: &str = "FamilyTree.xlsx";

/// Height of the header row, in points
const HEADER_ROW_HEIGHT: f64 = 20.0;

/// Destination for a built workbook
pub trait ExportSink {
    /// Write every sheet of the workbook
    fn write(&mut self, workbook: &Workbook) -> Result<()>;
}

/// Writes an `.xlsx` file to disk
#[derive(Debug, Clone)]
pub struct XlsxFileSink {
    path: PathBuf,
}

impl XlsxFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportSink for XlsxFileSink {
    fn write(&mut self, workbook: &Workbook) -> Result<()> {
        let mut book = assemble(workbook)?;
        book.save(&self.path)
            .with_context(|| format!("Failed to write workbook to {}", self.path.display()))?;
        info!(
            "Exported {} sheet(s) to {}",
            workbook.sheet_count(),
            self.path.display()
        );
        Ok(())
    }
}

/// Keeps the `.xlsx` bytes in memory
#[derive(Debug, Clone, Default)]
pub struct XlsxBufferSink {
    bytes: Vec<u8>,
}

impl XlsxBufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of the last written workbook (empty before the first write)
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl ExportSink for XlsxBufferSink {
    fn write(&mut self, workbook: &Workbook) -> Result<()> {
        let mut book = assemble(workbook)?;
        self.bytes = book
            .save_to_buffer()
            .context("Failed to serialize workbook")?;
        debug!("Serialized workbook into {} bytes", self.bytes.len());
        Ok(())
    }
}

/// Records workbooks without serializing them
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    written: Vec<Workbook>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self) -> &[Workbook] {
        &self.written
    }

    pub fn last(&self) -> Option<&Workbook> {
        self.written.last()
    }
}

impl ExportSink for MemorySink {
    fn write(&mut self, workbook: &Workbook) -> Result<()> {
        self.written.push(workbook.clone());
        Ok(())
    }
}

/// Flatten a tree and hand the resulting workbook to a sink
///
/// Fails without touching the sink when there is no tree.
pub fn export_tree(tree: Option<&FamilyTree>, sink: &mut dyn ExportSink) -> Result<Workbook> {
    let Some(tree) = tree else {
        bail!("No tree provided to export.");
    };

    let workbook = Workbook::from_tree(tree);
    debug!(
        "Built {} sheet(s) from {} member(s)",
        workbook.sheet_count(),
        tree.total_members()
    );
    sink.write(&workbook)?;
    Ok(workbook)
}

fn xlsx_color(hex: &str) -> xlsx::Color {
    Rgb::from_hex(hex)
        .map(|rgb| xlsx::Color::RGB(rgb.to_u32()))
        .unwrap_or(xlsx::Color::White)
}

fn header_format() -> xlsx::Format {
    xlsx::Format::new()
        .set_bold()
        .set_font_color(xlsx::Color::White)
        .set_background_color(xlsx_color(HEADER_BACKGROUND))
        .set_align(xlsx::FormatAlign::Center)
        .set_align(xlsx::FormatAlign::VerticalCenter)
        .set_border(xlsx::FormatBorder::Thin)
}

fn cell_format(column: &Column) -> xlsx::Format {
    xlsx::Format::new()
        .set_font_color(xlsx::Color::RGB(column.text.rgb().to_u32()))
        .set_background_color(xlsx_color(&column.background))
        .set_align(xlsx::FormatAlign::Center)
        .set_align(xlsx::FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(xlsx::FormatBorder::Thin)
}

fn assemble(workbook: &Workbook) -> Result<xlsx::Workbook> {
    let mut book = xlsx::Workbook::new();
    for sheet in workbook.sheets() {
        write_sheet(book.add_worksheet(), sheet)
            .with_context(|| format!("Failed to build sheet {}", sheet.name))?;
    }
    Ok(book)
}

fn write_sheet(worksheet: &mut xlsx::Worksheet, sheet: &Sheet) -> Result<()> {
    worksheet.set_name(&sheet.name)?;

    let header = header_format();
    let formats: Vec<xlsx::Format> = sheet.columns.iter().map(cell_format).collect();

    for (index, column) in sheet.columns.iter().enumerate() {
        let col = u16::try_from(index).context("Too many levels for one sheet")?;
        worksheet.set_column_width(col, column.width as f64)?;
        worksheet.write_string_with_format(0, col, column.header.as_str(), &header)?;
    }
    worksheet.set_row_height(0, HEADER_ROW_HEIGHT)?;
    worksheet.set_freeze_panes(1, 0)?;

    let merged = sheet.merged_cells();
    for (row_index, row) in sheet.rows.iter().enumerate() {
        let xl_row = data_row(row_index)?;
        for (index, value) in row.iter().enumerate() {
            if merged.contains(&(row_index, index)) {
                continue;
            }
            let col = u16::try_from(index).context("Too many levels for one sheet")?;
            if value.is_empty() {
                worksheet.write_blank(xl_row, col, &formats[index])?;
            } else {
                worksheet.write_string_with_format(xl_row, col, value.as_str(), &formats[index])?;
            }
        }
    }

    for merge in &sheet.merges {
        let col = u16::try_from(merge.column).context("Too many levels for one sheet")?;
        let value = sheet.cell(merge.first_row, merge.column).unwrap_or_default();
        worksheet.merge_range(
            data_row(merge.first_row)?,
            col,
            data_row(merge.last_row)?,
            col,
            value,
            &formats[merge.column],
        )?;
    }

    Ok(())
}

/// Worksheet row of a data row: the header occupies row 0
fn data_row(index: usize) -> Result<u32> {
    u32::try_from(index + 1).context("Too many rows for one sheet")
}
