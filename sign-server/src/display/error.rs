//! Display error types.

/// Errors that can occur when writing to the display.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Display server returned an error status
    #[error("display error {status}: {message}")]
    Api { status: u16, message: String },
}
