//! Secret value resolution.
//!
//! A raw value is either a literal or a `file(<path>)` reference whose
//! contents become the plaintext.

use std::fs;

use crate::constants::value::{FILE_PREFIX, FILE_SUFFIX};
use crate::errors::ResolutionError;

/// Resolve a raw secret value into the plaintext to encrypt.
///
/// `file(<path>)` reads the raw bytes of the file at `<path>` and strips a
/// single trailing `\n`. Anything else is returned unchanged as UTF-8 bytes.
///
/// # Errors
///
/// Returns [`ResolutionError::EmptyFilePath`] for `file()` and
/// [`ResolutionError::FileReadFailed`] when the file cannot be read.
pub fn resolve(raw_value: &str) -> Result<Vec<u8>, ResolutionError> {
    let Some(path) = file_reference(raw_value) else {
        return Ok(raw_value.as_bytes().to_vec());
    };

    if path.is_empty() {
        return Err(ResolutionError::EmptyFilePath);
    }

    let mut content = fs::read(path).map_err(|cause| ResolutionError::FileReadFailed {
        path: path.to_string(),
        cause,
    })?;

    if content.last() == Some(&b'\n') {
        content.pop();
    }

    tracing::debug!(path, bytes = content.len(), "resolved secret value from file");
    Ok(content)
}

/// Extract the path from a `file(<path>)` reference.
fn file_reference(raw_value: &str) -> Option<&str> {
    raw_value
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)
}
