//! Error formatting utilities.

use anyhow::Error;

/// Format an error and its source chain into a single line.
///
/// Messages are joined with " → ". A source whose message is already part
/// of its parent's message (common with `#[error("...: {0}")]` wrappers) is
/// skipped so the cause is not repeated.
///
/// # Example
///
/// ```
/// use gh_secret_seal::error::format_error_chain;
///
/// let err = anyhow::anyhow!("outer error")
///     .context("middle error")
///     .context("inner error");
/// assert_eq!(format_error_chain(&err), "inner error → middle error → outer error");
/// ```
pub fn format_error_chain(error: &Error) -> String {
    let mut error_chain: Vec<String> = Vec::new();
    for cause in error.chain() {
        let message = cause.to_string();
        if error_chain.last().is_some_and(|parent| parent.contains(&message)) {
            continue;
        }
        error_chain.push(message);
    }
    error_chain.join(" → ")
}
