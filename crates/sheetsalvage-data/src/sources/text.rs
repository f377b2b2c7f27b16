//! Base64 source file loader.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RecoveryError, Result};

/// Read the whole source file as UTF-8 text
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| RecoveryError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), chars = text.len(), "read base64 source");
    Ok(text)
}
