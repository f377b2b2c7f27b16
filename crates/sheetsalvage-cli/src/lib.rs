//! sheetsalvage CLI - Command-line interface library
//!
//! Recovers a spreadsheet that was saved as base64 text: decodes it, writes
//! the workbook, reads it back and exports the first (or chosen) sheet as CSV.
//!
//! # Library Usage
//!
//! ```ignore
//! use sheetsalvage_cli::{recover_command, Outcome};
//! use sheetsalvage_data::RecoveryConfig;
//!
//! let config = RecoveryConfig::default();
//! let outcome = recover_command(&config, &mut std::io::stdout())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Fixed default paths
//! sheetsalvage
//!
//! # Explicit paths and sheet
//! sheetsalvage --input export.txt --xlsx book.xlsx --csv book.csv --sheet "Longevity Data"
//!
//! # Non-zero exit status when the recovery fails
//! sheetsalvage --strict -v
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{recover_command, run_cli, Outcome};
