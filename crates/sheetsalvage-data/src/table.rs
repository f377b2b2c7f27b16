//! In-memory table model for a recovered sheet.

use std::collections::HashSet;
use std::fmt;

use chrono::{NaiveDateTime, Timelike};

/// A typed cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Spreadsheet error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => {
                // Whole numbers print without decimals
                if v.is_finite() && v.fract() == 0.0 {
                    write!(f, "{:.0}", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
            // Decided per cell: midnight values drop the time even when
            // other cells in the same column carry one
            CellValue::DateTime(dt) => {
                if dt.num_seconds_from_midnight() == 0 && dt.nanosecond() == 0 {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// No non-empty cells
    Empty,
    Integer,
    Float,
    Boolean,
    DateTime,
    Text,
    /// Non-empty cells of more than one kind
    Mixed,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Empty => "empty",
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Boolean => "boolean",
            ColumnKind::DateTime => "datetime",
            ColumnKind::Text => "text",
            ColumnKind::Mixed => "mixed",
        }
    }

    fn of_cell(cell: &CellValue) -> Option<ColumnKind> {
        match cell {
            CellValue::Empty => None,
            CellValue::Int(_) => Some(ColumnKind::Integer),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(ColumnKind::Integer),
            CellValue::Float(_) => Some(ColumnKind::Float),
            CellValue::Bool(_) => Some(ColumnKind::Boolean),
            CellValue::DateTime(_) => Some(ColumnKind::DateTime),
            CellValue::Text(_) => Some(ColumnKind::Text),
            CellValue::Error(_) => Some(ColumnKind::Mixed),
        }
    }

    fn merge(self, other: ColumnKind) -> ColumnKind {
        use ColumnKind::*;
        match (self, other) {
            (Empty, k) | (k, Empty) => k,
            (a, b) if a == b => a,
            (Integer, Float) | (Float, Integer) => Float,
            _ => Mixed,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub non_null: usize,
    pub nulls: usize,
}

/// A sheet loaded as named columns and typed rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table whose first row holds the column names.
    ///
    /// Empty header cells become `Unnamed: <index>` and repeated names get
    /// `.1`, `.2`, ... suffixes. Short rows are padded with empty cells.
    pub fn from_header_row(mut grid: Vec<Vec<CellValue>>) -> Self {
        if grid.is_empty() {
            return Self::default();
        }

        let header = grid.remove(0);
        let width = grid
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let raw_names: Vec<String> = (0..width)
            .map(|i| match header.get(i) {
                Some(cell) if !cell.is_empty() => cell.to_string(),
                _ => format!("Unnamed: {}", i),
            })
            .collect();
        let columns = dedupe_names(raw_names);

        let rows = grid
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The first `n` rows
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Kind and null counts for every column, in column order
    pub fn summarize(&self) -> Vec<ColumnSummary> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let mut kind = ColumnKind::Empty;
                let mut nulls = 0;
                for row in &self.rows {
                    match ColumnKind::of_cell(&row[idx]) {
                        Some(k) => kind = kind.merge(k),
                        None => nulls += 1,
                    }
                }
                ColumnSummary {
                    name: name.clone(),
                    kind,
                    non_null: self.rows.len() - nulls,
                    nulls,
                }
            })
            .collect()
    }
}

/// Make column names unique by suffixing later duplicates
fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut candidate = name.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, n);
            n += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }

    out
}
