//! Validated, normalized access to stop predictions.

use std::future::Future;

use tracing::debug;

use crate::domain::Prediction;

use super::convert::normalize;
use super::error::{NextbusError, PredictionError};
use super::types::RouteGroup;

/// Source of raw prediction groups for a stop.
///
/// This abstraction allows the adapter to be tested without the network.
pub trait PredictionFeed: Send + Sync {
    /// Fetch prediction groups (one per route) for `stop_id` of `agency`.
    fn stop_predictions(
        &self,
        agency: &str,
        stop_id: &str,
    ) -> impl Future<Output = Result<Vec<RouteGroup>, NextbusError>> + Send;
}

/// Wraps a feed with request validation and normalization.
#[derive(Debug, Clone)]
pub struct PredictionService<F> {
    feed: F,
}

impl<F: PredictionFeed> PredictionService<F> {
    pub fn new(feed: F) -> Self {
        Self { feed }
    }

    /// List predictions for a stop.
    ///
    /// Empty `agency` or `stop_id` fail with `InvalidArgument` before the
    /// feed is called. Feed failures and unparseable arrivals are `Internal`.
    /// There is no retry.
    pub async fn list_predictions(
        &self,
        agency: &str,
        stop_id: &str,
    ) -> Result<Vec<Prediction>, PredictionError> {
        if agency.is_empty() {
            return Err(PredictionError::InvalidArgument("agency is required"));
        }
        if stop_id.is_empty() {
            return Err(PredictionError::InvalidArgument("stop ID is required"));
        }

        let groups = self
            .feed
            .stop_predictions(agency, stop_id)
            .await
            .map_err(PredictionError::Upstream)?;

        let predictions = normalize(&groups)?;
        debug!(agency, stop_id, count = predictions.len(), "normalized predictions");

        Ok(predictions)
    }

    /// Access the underlying feed.
    pub fn feed(&self) -> &F {
        &self.feed
    }
}
