//! Base64 decoding of the recovered text.

use base64::{engine::general_purpose, Engine};
use tracing::debug;

use crate::error::{RecoveryError, Result};

/// Decode base64 text into the original bytes.
///
/// ASCII whitespace is ignored anywhere in the input, so line-wrapped
/// content decodes. A leading `data:<mime>;base64,` header is dropped.
/// The standard alphabet with padding is required.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let payload = strip_data_url(text.trim_start());
    let compact: Vec<u8> = payload
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if compact.is_empty() {
        return Err(RecoveryError::Decode(
            "input contains no base64 data".to_string(),
        ));
    }

    let bytes = general_purpose::STANDARD.decode(&compact)?;
    debug!(
        encoded = compact.len(),
        decoded = bytes.len(),
        "decoded base64 payload"
    );
    Ok(bytes)
}

/// Strip a `data:...;base64,` prefix, if present
fn strip_data_url(text: &str) -> &str {
    if !text.starts_with("data:") {
        return text;
    }
    match text.find(',') {
        Some(comma) if text[..comma].ends_with(";base64") => &text[comma + 1..],
        _ => text,
    }
}
