//! # sheetsalvage-data
//!
//! Recover a spreadsheet that was saved as base64 text instead of binary.
//!
//! ## Pipeline
//!
//! 1. **Load** the source text ([`read_source`])
//! 2. **Decode** it from base64 ([`decode_base64`])
//! 3. **Write** the bytes as a workbook and read one sheet back with
//!    `calamine` ([`write_spreadsheet`], [`ExcelSource`])
//! 4. **Export** the sheet as CSV ([`write_csv`]) and summarise it
//!    ([`Report`])
//!
//! Steps 2 to 4 are bundled in [`recover`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use sheetsalvage_data::{read_source, recover, RecoveryConfig, Report};
//!
//! let config = RecoveryConfig::default();
//! let text = read_source(&config.input)?;
//! let recovery = recover(&config, &text)?;
//!
//! let report = Report::new(&recovery.table, config.preview_rows);
//! println!("{}", report.preview());
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod sources;
pub mod table;

// Re-exports
pub use config::RecoveryConfig;
pub use decode::decode_base64;
pub use error::{ErrorKind, RecoveryError, Result};
pub use export::{write_csv, write_csv_to};
pub use pipeline::{recover, Recovery};
pub use report::Report;
pub use sources::{read_source, write_spreadsheet, ExcelSource, TableSource};
pub use table::{CellValue, ColumnKind, ColumnSummary, Table};
