//! In-memory table

use crate::schema::{Column, ColumnData};

/// A loaded dataset: named columns of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    num_rows: usize,
}

impl Table {
    /// Create a table from columns
    ///
    /// Returns `None` when the columns differ in length.
    pub fn new(columns: Vec<Column>) -> Option<Self> {
        let num_rows = columns.first().map_or(0, |c| c.data.len());
        if columns.iter().any(|c| c.data.len() != num_rows) {
            return None;
        }
        Some(Self { columns, num_rows })
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// All columns, in header order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a column's data by name
    pub fn data(&self, name: &str) -> Option<&ColumnData> {
        self.column(name).map(|c| &c.data)
    }

    /// Rendered values of one row, in header order
    pub fn row_display(&self, row: usize) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| c.data.display_value(row))
            .collect()
    }
}
