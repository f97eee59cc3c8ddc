use std::collections::HashSet;
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::palette::{column_color, contrast_color, TextColor};

/// Narrowest column width, in characters
pub const MIN_COLUMN_WIDTH: usize = 12;

/// Widest column width, in characters
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Extra room added to the longest value of a column
const WIDTH_PADDING: usize = 2;

/// Layout and colors of one sheet column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    /// Header text
    pub header: String,

    /// Display width hint, in characters
    pub width: usize,

    /// Background color of the data cells (`#RRGGBB`)
    pub background: String,

    /// Text color of the data cells
    pub text: TextColor,
}

/// A vertical run of identical cells shown as one cell
///
/// Rows are data-row indices (the header row is not counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeRange {
    /// Column index
    pub column: usize,

    /// First data row of the run
    pub first_row: usize,

    /// Last data row of the run (inclusive)
    pub last_row: usize,
}

impl MergeRange {
    /// Number of rows covered
    pub fn len(&self) -> usize {
        self.last_row - self.first_row + 1
    }

    /// Always false: a merge covers at least two rows
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if this merge covers the given cell
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.column == column && row >= self.first_row && row <= self.last_row
    }
}

/// One tabular sheet ready to be written by a sink
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// Sheet name
    pub name: String,

    /// Column layout, one entry per header
    pub columns: Vec<Column>,

    /// Data rows, each exactly `columns.len()` cells wide
    pub rows: Vec<Vec<String>>,

    /// Vertical merges, ordered by column then row
    pub merges: Vec<MergeRange>,
}

impl Sheet {
    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header texts
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Value of a data cell
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// The merge covering a data cell, if any
    pub fn merge_at(&self, row: usize, column: usize) -> Option<&MergeRange> {
        self.merges.iter().find(|m| m.contains(row, column))
    }

    /// Every `(row, column)` data cell covered by some merge
    pub fn merged_cells(&self) -> HashSet<(usize, usize)> {
        self.merges
            .iter()
            .flat_map(|m| (m.first_row..=m.last_row).map(move |row| (row, m.column)))
            .collect()
    }
}

/// Maximal runs of two or more consecutive equal, non-empty values
///
/// An empty value never starts or extends a run.
pub fn merge_runs<S: AsRef<str>>(values: &[S]) -> Vec<RangeInclusive<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;

    while start < values.len() {
        let value = values[start].as_ref();
        if value.is_empty() {
            start += 1;
            continue;
        }

        let mut end = start;
        while end + 1 < values.len() && values[end + 1].as_ref() == value {
            end += 1;
        }
        if end > start {
            runs.push(start..=end);
        }
        start = end + 1;
    }

    runs
}

/// Width hint for a column: longest value (header included) plus padding,
/// clamped to `MIN_COLUMN_WIDTH..=MAX_COLUMN_WIDTH`
pub fn column_width<'a>(header: &str, values: impl IntoIterator<Item = &'a str>) -> usize {
    let longest = values
        .into_iter()
        .map(|value| value.chars().count())
        .fold(header.chars().count(), usize::max);

    (longest + WIDTH_PADDING).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

/// Build a sheet from rows, headers and a column palette
///
/// Rows are padded (or cut) to the number of headers.
pub fn build_sheet(
    name: impl Into<String>,
    rows: Vec<Vec<String>>,
    headers: Vec<String>,
    palette: &[&str],
) -> Sheet {
    let width = headers.len();
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect();

    let mut columns = Vec::with_capacity(width);
    let mut merges = Vec::new();

    for (index, header) in headers.into_iter().enumerate() {
        let values: Vec<&str> = rows.iter().map(|row| row[index].as_str()).collect();
        let background = column_color(palette, index);

        merges.extend(merge_runs(&values[..]).into_iter().map(|run| MergeRange {
            column: index,
            first_row: *run.start(),
            last_row: *run.end(),
        }));
        columns.push(Column {
            width: column_width(&header, values.iter().copied()),
            header,
            background: background.to_string(),
            text: contrast_color(background),
        });
    }

    Sheet {
        name: name.into(),
        columns,
        rows,
        merges,
    }
}
