//! Recovery configuration.
//!
//! Settings can be loaded from a `sheetsalvage.toml` file:
//!
//! ```toml
//! input = "LongevityTracker_Data_1768477954858.txt"
//! spreadsheet = "recovered_data.xlsx"
//! csv = "recovered_data.csv"
//! sheet = "Longevity Data"
//! preview_rows = 5
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults below.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default base64 source file
pub const DEFAULT_INPUT: &str = "LongevityTracker_Data_1768477954858.txt";

/// Default path of the recovered workbook
pub const DEFAULT_SPREADSHEET: &str = "recovered_data.xlsx";

/// Default path of the CSV export
pub const DEFAULT_CSV: &str = "recovered_data.csv";

/// Default number of rows shown in the preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Paths and options for one recovery run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecoveryConfig {
    /// Text file holding the base64 content
    pub input: PathBuf,
    /// Where the decoded workbook is written
    pub spreadsheet: PathBuf,
    /// Where the CSV export is written
    pub csv: PathBuf,
    /// Sheet to load; the first sheet when unset
    pub sheet: Option<String>,
    /// Rows shown in the console preview
    pub preview_rows: usize,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            spreadsheet: PathBuf::from(DEFAULT_SPREADSHEET),
            csv: PathBuf::from(DEFAULT_CSV),
            sheet: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl RecoveryConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Place both outputs inside `dir`, keeping their file names
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.spreadsheet = dir.join(file_name_or(&self.spreadsheet, DEFAULT_SPREADSHEET));
        self.csv = dir.join(file_name_or(&self.csv, DEFAULT_CSV));
        self
    }
}

fn file_name_or(path: &std::path::Path, fallback: &str) -> PathBuf {
    path.file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fallback))
}
