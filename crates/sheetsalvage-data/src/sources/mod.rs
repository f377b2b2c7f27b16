//! Pipeline inputs.
//!
//! This module contains the base64 text loader and the workbook adapter.

pub mod excel;
pub mod text;

pub use excel::{write_spreadsheet, ExcelSource};
pub use text::read_source;

use crate::error::Result;
use crate::table::Table;

/// Trait for sources that can provide a sheet as a [`Table`]
pub trait TableSource {
    /// Load one sheet, using the first row as column names
    ///
    /// # Arguments
    /// * `sheet` - Sheet name, or `None` for the default sheet
    fn read_table(&self, sheet: Option<&str>) -> Result<Table>;

    /// List available sheets in the source
    fn list_sheets(&self) -> Vec<String>;

    /// Get the default sheet name
    fn default_sheet(&self) -> Option<String>;
}
