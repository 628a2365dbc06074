//! Collaborator seams for the driver.
//!
//! Each is one operation wide so tests can substitute them without any
//! transport.

use std::future::Future;

use crate::display::DisplayError;
use crate::domain::{Configuration, Prediction, WriteRequest};
use crate::nextbus::{PredictionError, PredictionFeed, PredictionService};

use super::error::ConfigSourceError;

/// Where the sign configuration comes from.
pub trait ConfigSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Configuration, ConfigSourceError>> + Send;
}

/// Normalized predictions for a stop.
pub trait PredictionSource: Send + Sync {
    fn list_predictions(
        &self,
        agency: &str,
        stop_id: &str,
    ) -> impl Future<Output = Result<Vec<Prediction>, PredictionError>> + Send;
}

/// Where write requests go.
pub trait DisplaySink: Send + Sync {
    fn write(&self, request: &WriteRequest) -> impl Future<Output = Result<(), DisplayError>> + Send;
}

impl<F: PredictionFeed> PredictionSource for PredictionService<F> {
    async fn list_predictions(
        &self,
        agency: &str,
        stop_id: &str,
    ) -> Result<Vec<Prediction>, PredictionError> {
        PredictionService::list_predictions(self, agency, stop_id).await
    }
}
