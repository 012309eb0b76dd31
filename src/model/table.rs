//! Table types.

use serde::{Deserialize, Serialize};

/// A table structure.
///
/// Rows are kept exactly as parsed; nothing forces them to the same width.
/// The first row defines the column count that sinks render against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows of cell text.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: rows.into_iter().map(TableRow::new).collect(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if any row differs in width from the first row.
    pub fn is_ragged(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().any(|r| r.cells.len() != width)
    }

    /// Rows clipped to the column count of the first row.
    ///
    /// Excess cells are dropped; shorter rows are returned as-is.
    pub fn clipped_rows(&self) -> impl Iterator<Item = &[String]> {
        let width = self.column_count();
        self.rows
            .iter()
            .map(move |r| &r.cells[..r.cells.len().min(width)])
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row: an ordered sequence of non-empty cell strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<String>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(Into::into).collect())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells.join("\t")
    }
}
