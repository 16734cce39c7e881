//! Basic dataset overview: columns, types, non-missing counts, first rows

use sensor_io::{ColumnType, Table};
use std::collections::BTreeMap;
use std::fmt;

/// One line of the column listing
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub non_missing: usize,
    pub dtype: ColumnType,
}

/// Overview of a loaded table
#[derive(Debug, Clone, PartialEq)]
pub struct BasicInfo {
    pub num_rows: usize,
    pub columns: Vec<ColumnSummary>,
    /// Requested preview length
    pub head_rows: usize,
    /// Rendered values of the preview rows, at most `head_rows`
    pub head: Vec<Vec<String>>,
}

impl BasicInfo {
    /// Number of columns of each type, ordered by type name
    pub fn dtype_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for column in &self.columns {
            *counts.entry(column.dtype.name()).or_insert(0) += 1;
        }
        counts
    }
}

/// Summarize a table, previewing its first `head_rows` rows
pub fn basic_info(table: &Table, head_rows: usize) -> BasicInfo {
    let columns = table
        .columns()
        .iter()
        .map(|c| ColumnSummary {
            name: c.name.clone(),
            non_missing: c.data.non_missing_count(),
            dtype: c.dtype(),
        })
        .collect();

    let head = (0..table.num_rows().min(head_rows))
        .map(|row| table.row_display(row))
        .collect();

    BasicInfo {
        num_rows: table.num_rows(),
        columns,
        head_rows,
        head,
    }
}

impl fmt::Display for BasicInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Basic Info:")?;
        if self.num_rows == 0 {
            writeln!(f, "RangeIndex: 0 entries")?;
        } else {
            writeln!(
                f,
                "RangeIndex: {} entries, 0 to {}",
                self.num_rows,
                self.num_rows - 1
            )?;
        }
        writeln!(f, "Data columns (total {} columns):", self.columns.len())?;
        self.fmt_columns(f)?;

        let tally: Vec<String> = self
            .dtype_counts()
            .iter()
            .map(|(name, count)| format!("{}({})", name, count))
            .collect();
        writeln!(f, "dtypes: {}", tally.join(", "))?;

        writeln!(f)?;
        writeln!(f, "First {} Rows:", self.head_rows)?;
        self.fmt_head(f)
    }
}

impl BasicInfo {
    fn fmt_columns(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{} non-null", c.non_missing))
            .collect();
        let index_width = self.columns.len().saturating_sub(1).to_string().len().max(3);
        let name_width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .chain(std::iter::once("Column".len()))
            .max()
            .unwrap_or(0);
        let count_width = counts
            .iter()
            .map(String::len)
            .chain(std::iter::once("Non-Null Count".len()))
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            " {:<iw$} {:<nw$}  {:<cw$}  Dtype",
            "#",
            "Column",
            "Non-Null Count",
            iw = index_width,
            nw = name_width,
            cw = count_width
        )?;
        writeln!(
            f,
            " {:<iw$} {:<nw$}  {:<cw$}  -----",
            "---",
            "------",
            "--------------",
            iw = index_width,
            nw = name_width,
            cw = count_width
        )?;
        for (i, (column, count)) in self.columns.iter().zip(&counts).enumerate() {
            writeln!(
                f,
                " {:<iw$} {:<nw$}  {:<cw$}  {}",
                i,
                column.name,
                count,
                column.dtype,
                iw = index_width,
                nw = name_width,
                cw = count_width
            )?;
        }
        Ok(())
    }

    fn fmt_head(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.head.is_empty() {
            return writeln!(f, "Empty table");
        }

        let index_width = (self.head.len() - 1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(j, c)| {
                self.head
                    .iter()
                    .map(|row| row[j].len())
                    .chain(std::iter::once(c.name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:iw$}", "", iw = index_width)?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", column.name, w = width)?;
        }
        writeln!(f)?;

        for (i, row) in self.head.iter().enumerate() {
            write!(f, "{:<iw$}", i, iw = index_width)?;
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "  {:>w$}", value, w = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
