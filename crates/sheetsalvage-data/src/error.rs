//! Error types for the recovery pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for recovery operations
pub type Result<T> = std::result::Result<T, RecoveryError>;

/// Which step of the recovery produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading the configuration
    Config,
    /// Reading the base64 source file
    ReadInput,
    /// Decoding base64 text
    Decode,
    /// Writing the recovered spreadsheet
    WriteSpreadsheet,
    /// Parsing the recovered spreadsheet
    Parse,
    /// Writing the CSV export
    WriteCsv,
}

impl ErrorKind {
    /// Whether this kind belongs to the recovery attempt proper
    /// (decode through CSV export), as opposed to setup.
    pub fn is_recovery_stage(self) -> bool {
        !matches!(self, ErrorKind::Config | ErrorKind::ReadInput)
    }
}

/// Errors that can occur while recovering a spreadsheet
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Source file missing, unreadable or not UTF-8
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source text is not valid base64
    #[error("invalid base64: {0}")]
    Decode(String),

    /// Spreadsheet file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    WriteSpreadsheet {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Written file is not a readable workbook
    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// CSV export could not be written
    #[error("failed to write {}: {message}", .path.display())]
    WriteCsv { path: PathBuf, message: String },
}

impl RecoveryError {
    /// The failure kind, for callers that need to tell stages apart
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecoveryError::Config(_) => ErrorKind::Config,
            RecoveryError::ReadInput { .. } => ErrorKind::ReadInput,
            RecoveryError::Decode(_) => ErrorKind::Decode,
            RecoveryError::WriteSpreadsheet { .. } => ErrorKind::WriteSpreadsheet,
            RecoveryError::Parse { .. } => ErrorKind::Parse,
            RecoveryError::WriteCsv { .. } => ErrorKind::WriteCsv,
        }
    }
}

impl From<base64::DecodeError> for RecoveryError {
    fn from(err: base64::DecodeError) -> Self {
        RecoveryError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for RecoveryError {
    fn from(err: toml::de::Error) -> Self {
        RecoveryError::Config(err.to_string())
    }
}
