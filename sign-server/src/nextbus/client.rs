//! NextBus public JSON feed HTTP client.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::agencies::AgencyProvider;
use crate::domain::Agency;

use super::error::NextbusError;
use super::service::PredictionFeed;
use super::types::{AgencyListResponse, FeedResponse, PredictionsResponse, RouteGroup};

/// Default base URL for the NextBus public JSON feed.
const DEFAULT_BASE_URL: &str = "https://retro.umoiq.com/service/publicJSONFeed";

/// Configuration for the NextBus client.
#[derive(Debug, Clone)]
pub struct NextbusConfig {
    /// Base URL of the JSON feed
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NextbusConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NextbusConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the NextBus public JSON feed.
#[derive(Debug, Clone)]
pub struct NextbusClient {
    http: reqwest::Client,
    base_url: String,
}

impl NextbusClient {
    /// Create a new NextBus client.
    pub fn new(config: NextbusConfig) -> Result<Self, NextbusError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch every agency the feed knows about.
    pub async fn agency_list(&self) -> Result<Vec<Agency>, NextbusError> {
        let response: AgencyListResponse = self.get(&[("command", "agencyList")]).await?;

        Ok(response
            .agency
            .into_vec()
            .into_iter()
            .map(|a| Agency::new(a.tag, a.title))
            .collect())
    }

    /// Fetch raw predictions for a stop, grouped by route.
    pub async fn stop_predictions(
        &self,
        agency: &str,
        stop_id: &str,
    ) -> Result<Vec<RouteGroup>, NextbusError> {
        let response: PredictionsResponse = self
            .get(&[("command", "predictions"), ("a", agency), ("stopId", stop_id)])
            .await?;

        Ok(response
            .predictions
            .into_vec()
            .into_iter()
            .map(RouteGroup::from)
            .collect())
    }

    async fn get<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<T, NextbusError> {
        let response = self.http.get(&self.base_url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NextbusError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_feed(&body)
    }
}

/// Parse a feed body, turning in-band errors into `NextbusError::Feed`.
fn parse_feed<T: DeserializeOwned>(body: &str) -> Result<T, NextbusError> {
    let parsed: FeedResponse<T> = serde_json::from_str(body).map_err(|e| NextbusError::Json {
        message: e.to_string(),
    })?;

    match parsed {
        FeedResponse::Ok(value) => Ok(value),
        FeedResponse::Error { error } => Err(NextbusError::Feed {
            message: error.content.trim().to_string(),
            should_retry: error.should_retry.as_deref() == Some("true"),
        }),
    }
}

impl PredictionFeed for NextbusClient {
    async fn stop_predictions(
        &self,
        agency: &str,
        stop_id: &str,
    ) -> Result<Vec<RouteGroup>, NextbusError> {
        NextbusClient::stop_predictions(self, agency, stop_id).await
    }
}

impl AgencyProvider for NextbusClient {
    async fn list_agencies(&self) -> Result<Vec<Agency>, NextbusError> {
        self.agency_list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = NextbusConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = NextbusConfig::new()
            .with_base_url("http://localhost:8081")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8081");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        assert!(NextbusClient::new(NextbusConfig::default()).is_ok());
    }

    #[test]
    fn parse_feed_reports_in_band_errors() {
        let body = r#"{"Error": {"content": "\n  Could not get stop \"99999\".\n", "shouldRetry": "false"}}"#;

        let err = parse_feed::<PredictionsResponse>(body).unwrap_err();

        match err {
            NextbusError::Feed {
                message,
                should_retry,
            } => {
                assert_eq!(message, "Could not get stop \"99999\".");
                assert!(!should_retry);
            }
            other => panic!("expected feed error, got {other:?}"),
        }
    }

    #[test]
    fn parse_feed_rejects_garbage() {
        let err = parse_feed::<AgencyListResponse>("<html>").unwrap_err();
        assert!(matches!(err, NextbusError::Json { .. }));
    }

    #[test]
    fn parse_feed_reads_predictions() {
        let body = r#"{"predictions": {"routeTag": "38", "direction": {"title": "Geary", "prediction": [{"minutes": "5"}, {"minutes": "12"}]}}}"#;

        let response = parse_feed::<PredictionsResponse>(body).unwrap();
        let groups: Vec<RouteGroup> = response
            .predictions
            .into_vec()
            .into_iter()
            .map(RouteGroup::from)
            .collect();

        assert_eq!(groups[0].route, "38");
        assert_eq!(groups[0].directions[0].arrivals, vec!["5", "12"]);
    }
}
