//! The recovery attempt: decode, write, re-read and export.

use std::path::PathBuf;

use tracing::{info, info_span};

use crate::config::RecoveryConfig;
use crate::decode::decode_base64;
use crate::error::Result;
use crate::export::write_csv;
use crate::sources::{write_spreadsheet, ExcelSource, TableSource};
use crate::table::Table;

/// Outputs of a successful recovery
#[derive(Debug)]
pub struct Recovery {
    /// Where the decoded workbook was written
    pub spreadsheet_path: PathBuf,
    /// Where the CSV export was written
    pub csv_path: PathBuf,
    /// Size of the decoded workbook
    pub bytes_written: usize,
    /// The sheet as loaded back from the workbook
    pub table: Table,
}

/// Run every stage after loading on `source` text.
///
/// Stages run in order and the first failure is returned; files written by
/// earlier stages are left in place.
pub fn recover(config: &RecoveryConfig, source: &str) -> Result<Recovery> {
    let _span = info_span!("recover", input = %config.input.display()).entered();

    let bytes = decode_base64(source)?;
    write_spreadsheet(&bytes, &config.spreadsheet)?;

    let table = ExcelSource::new(&config.spreadsheet)?.read_table(config.sheet.as_deref())?;

    write_csv(&table, &config.csv)?;
    info!(rows = table.row_count(), "recovery complete");

    Ok(Recovery {
        spreadsheet_path: config.spreadsheet.clone(),
        csv_path: config.csv.clone(),
        bytes_written: bytes.len(),
        table,
    })
}
