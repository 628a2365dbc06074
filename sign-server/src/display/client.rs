//! Display server HTTP client.

use std::time::Duration;

use crate::domain::WriteRequest;
use crate::driver::DisplaySink;

use super::error::DisplayError;

/// Default display server address (the Raspberry Pi driving the LCD).
const DEFAULT_BASE_URL: &str = "http://raspberrypi.local:50051";

/// Configuration for the display client.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Base URL of the display server
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DisplayConfig {
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

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the display server.
#[derive(Debug, Clone)]
pub struct DisplayClient {
    http: reqwest::Client,
    write_url: String,
}

impl DisplayClient {
    pub fn new(config: DisplayConfig) -> Result<Self, DisplayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            write_url: format!("{}/write", config.base_url.trim_end_matches('/')),
        })
    }

    /// Replace what the display shows.
    pub async fn write(&self, request: &WriteRequest) -> Result<(), DisplayError> {
        let response = self.http.post(&self.write_url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DisplayError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}

impl DisplaySink for DisplayClient {
    async fn write(&self, request: &WriteRequest) -> Result<(), DisplayError> {
        DisplayClient::write(self, request).await
    }
}
