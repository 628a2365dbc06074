//! NextBus error types.

use super::convert::ConversionError;

/// Errors that can occur when talking to the NextBus feed.
#[derive(Debug, thiserror::Error)]
pub enum NextbusError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Feed answered with an in-band `Error` body
    #[error("feed error: {message}")]
    Feed { message: String, should_retry: bool },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

/// Coarse classification of a prediction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request was missing a required field.
    InvalidArgument,
    /// The feed failed or sent data we could not use.
    Internal,
}

/// Errors from listing predictions for a stop.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// A required request field was empty; the feed was not called
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The feed call itself failed
    #[error("problem getting predictions: {0}")]
    Upstream(#[source] NextbusError),

    /// The feed answered but an arrival could not be parsed
    #[error("problem converting predictions: {0}")]
    Conversion(#[from] ConversionError),
}

impl PredictionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PredictionError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            PredictionError::Upstream(_) | PredictionError::Conversion(_) => ErrorCode::Internal,
        }
    }
}
