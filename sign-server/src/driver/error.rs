//! Driver error types.

use crate::display::DisplayError;
use crate::nextbus::PredictionError;

/// Errors from fetching the sign configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigSourceError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Admin server returned an error status
    #[error("admin server error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the configuration JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

/// A failure inside a driver cycle. All of these are fatal.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("error reading configuration: {0}")]
    Config(#[source] ConfigSourceError),

    #[error("error listing predictions for stop {stop_id}: {source}")]
    Predictions {
        stop_id: String,
        #[source]
        source: PredictionError,
    },

    #[error("error writing to display: {0}")]
    Display(#[source] DisplayError),
}
