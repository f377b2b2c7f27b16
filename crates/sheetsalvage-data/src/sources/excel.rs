//! Excel/XLSX workbook writer and reader using calamine.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx, XlsxError};
use tracing::{debug, info};

use crate::error::{RecoveryError, Result};
use crate::sources::TableSource;
use crate::table::{CellValue, Table};

/// Local file header signature every xlsx (zip) container starts with
const ZIP_SIGNATURE: &[u8; 4] = b"PK\x03\x04";

/// Write decoded bytes verbatim, replacing any existing file
pub fn write_spreadsheet(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, bytes).map_err(|source| RecoveryError::WriteSpreadsheet {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote spreadsheet");
    Ok(())
}

/// Whether `bytes` begin like a zip container
pub fn has_zip_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_SIGNATURE)
}

/// Excel workbook data source
pub struct ExcelSource {
    /// Path to the Excel file
    path: PathBuf,
    /// Sheet names cache
    sheet_names: Vec<String>,
}

impl ExcelSource {
    /// Open a workbook and cache its sheet names
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook = Self::open(&path)?;
        let sheet_names = workbook.sheet_names().to_vec();
        debug!(path = %path.display(), sheets = ?sheet_names, "opened workbook");

        Ok(Self { path, sheet_names })
    }

    fn open(path: &Path) -> Result<Xlsx<std::io::BufReader<File>>> {
        open_workbook(path).map_err(|e: XlsxError| Self::parse_error(path, e.to_string()))
    }

    /// Build a parse error, noting when the file is not a zip container at all
    fn parse_error(path: &Path, message: String) -> RecoveryError {
        let mut head = [0u8; 4];
        // Files shorter than the signature count as non-zip; unreadable files say nothing
        let is_zip = match File::open(path) {
            Ok(mut f) => Some(f.read_exact(&mut head).is_ok() && has_zip_signature(&head)),
            Err(_) => None,
        };

        let message = match is_zip {
            Some(false) => format!(
                "{} (file does not start with a zip signature, so the decoded data is not an xlsx workbook)",
                message
            ),
            _ => message,
        };

        RecoveryError::Parse {
            path: path.to_path_buf(),
            message,
        }
    }

    /// Convert a calamine cell to a typed value
    fn cell_value(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
                Some(dt) => CellValue::DateTime(dt),
                None => CellValue::Text(cell.to_string()),
            },
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }

    /// Copy a calamine range into rows of typed cells
    fn extract_grid(range: &Range<Data>) -> Vec<Vec<CellValue>> {
        range
            .rows()
            .map(|row| row.iter().map(Self::cell_value).collect())
            .collect()
    }
}

impl TableSource for ExcelSource {
    fn read_table(&self, sheet: Option<&str>) -> Result<Table> {
        let sheet_name = match sheet {
            Some(name) if self.sheet_names.iter().any(|s| s == name) => name.to_string(),
            Some(name) => {
                return Err(RecoveryError::Parse {
                    path: self.path.clone(),
                    message: format!(
                        "sheet '{}' not found (available: {})",
                        name,
                        self.sheet_names.join(", ")
                    ),
                })
            }
            None => self.default_sheet().ok_or_else(|| RecoveryError::Parse {
                path: self.path.clone(),
                message: "workbook contains no sheets".to_string(),
            })?,
        };

        // Re-open workbook for reading (calamine requires this pattern)
        let mut workbook = Self::open(&self.path)?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| RecoveryError::Parse {
                path: self.path.clone(),
                message: format!("{}: {}", sheet_name, e),
            })?;

        let table = Table::from_header_row(Self::extract_grid(&range));
        info!(
            sheet = %sheet_name,
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded sheet"
        );
        Ok(table)
    }

    fn list_sheets(&self) -> Vec<String> {
        self.sheet_names.clone()
    }

    fn default_sheet(&self) -> Option<String> {
        self.sheet_names.first().cloned()
    }
}
