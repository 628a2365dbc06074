//! Admin server configuration client.

use std::time::Duration;

use crate::domain::Configuration;

use super::error::ConfigSourceError;
use super::sources::ConfigSource;

/// Default admin server address.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for the admin server client.
#[derive(Debug, Clone)]
pub struct AdminClientConfig {
    /// Base URL of the admin server
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AdminClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for AdminClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Reads the sign configuration from the admin server's JSON API.
#[derive(Debug, Clone)]
pub struct AdminConfigSource {
    http: reqwest::Client,
    config_url: String,
}

impl AdminConfigSource {
    pub fn new(config: AdminClientConfig) -> Result<Self, ConfigSourceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config_url: format!("{}/api/config", config.base_url.trim_end_matches('/')),
        })
    }

    /// Fetch the current configuration.
    pub async fn fetch(&self) -> Result<Configuration, ConfigSourceError> {
        let response = self.http.get(&self.config_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConfigSourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ConfigSourceError::Json {
            message: e.to_string(),
        })
    }
}

impl ConfigSource for AdminConfigSource {
    async fn fetch(&self) -> Result<Configuration, ConfigSourceError> {
        AdminConfigSource::fetch(self).await
    }
}
