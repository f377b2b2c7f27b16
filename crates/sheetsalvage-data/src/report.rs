//! Console diagnostics for a recovered table.
//!
//! The report mirrors what a user wants to see after a recovery: the first
//! few rows, the inferred type and null count of every column, and the total
//! row count.

use std::fmt;

use crate::table::{CellValue, Table};

/// Placeholder printed for empty cells in the preview
const EMPTY_MARKER: &str = "NaN";

/// Diagnostics for one table
pub struct Report<'a> {
    table: &'a Table,
    preview_rows: usize,
}

impl<'a> Report<'a> {
    pub fn new(table: &'a Table, preview_rows: usize) -> Self {
        Self {
            table,
            preview_rows,
        }
    }

    /// First rows as an aligned grid with a row-index column
    pub fn preview(&self) -> Preview<'_> {
        Preview {
            table: self.table,
            rows: self.preview_rows,
        }
    }

    /// Per-column type and null counts
    pub fn column_info(&self) -> ColumnInfo<'_> {
        ColumnInfo { table: self.table }
    }

    pub fn total_rows(&self) -> usize {
        self.table.row_count()
    }
}

pub struct Preview<'a> {
    table: &'a Table,
    rows: usize,
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.table.columns();
        if columns.is_empty() {
            return write!(f, "Empty table (no columns)");
        }

        let head = self.table.head(self.rows);
        if head.is_empty() {
            return write!(f, "Empty table\nColumns: [{}]", columns.join(", "));
        }

        let cells: Vec<Vec<String>> = head
            .iter()
            .map(|row| row.iter().map(preview_cell).collect())
            .collect();

        let index_width = (head.len() - 1).to_string().len();
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (name, width) in columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", name, width = *width)?;
        }

        for (idx, row) in cells.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<index_width$}", idx)?;
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "  {:>width$}", value, width = *width)?;
            }
        }

        Ok(())
    }
}

fn preview_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => EMPTY_MARKER.to_string(),
        other => other.to_string(),
    }
}

pub struct ColumnInfo<'a> {
    table: &'a Table,
}

impl fmt::Display for ColumnInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.table.summarize();
        write!(
            f,
            "{} entries, {} columns",
            self.table.row_count(),
            summary.len()
        )?;
        if summary.is_empty() {
            return Ok(());
        }

        let name_width = summary
            .iter()
            .map(|s| s.name.chars().count())
            .chain(std::iter::once("Column".len()))
            .max()
            .unwrap_or(0);
        let idx_width = summary.len().to_string().len().max(1);

        writeln!(f)?;
        write!(
            f,
            " {:<idx_width$}  {:<name_width$}  {:<8}  {:>8}  {:>4}",
            "#", "Column", "Type", "Non-Null", "Null"
        )?;
        for (idx, col) in summary.iter().enumerate() {
            writeln!(f)?;
            write!(
                f,
                " {:<idx_width$}  {:<name_width$}  {:<8}  {:>8}  {:>4}",
                idx,
                col.name,
                col.kind.as_str(),
                col.non_null,
                col.nulls
            )?;
        }

        Ok(())
    }
}
