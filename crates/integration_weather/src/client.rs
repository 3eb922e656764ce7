//! Tsukumijima forecast client
//!
//! HTTP client for the city forecast endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Forecast client errors
#[derive(Debug, Error)]
pub enum ForecastError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request never produced a response (DNS, refused connection, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered with something other than 200 OK
    #[error("Upstream returned HTTP {0}")]
    HttpStatus(u16),

    /// Response body is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Forecast service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// API base URL (default: <https://weather.tsukumijima.net/api>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: none, wait for the transport)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://weather.tsukumijima.net/api".to_string()
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Forecast client trait for fetching raw forecast documents
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch the forecast document for an area code
    async fn get_forecast(&self, area_code: &str) -> Result<serde_json::Value, ForecastError>;
}

/// Tsukumijima HTTP client implementation
#[derive(Debug, Clone)]
pub struct TsukumijimaClient {
    client: Client,
    config: ForecastConfig,
}

impl TsukumijimaClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ForecastError> {
        Self::new(ForecastConfig::default())
    }

    /// Build the city forecast URL for an area code
    fn build_forecast_url(&self, area_code: &str) -> String {
        format!(
            "{}/forecast/city/{}",
            self.config.base_url.trim_end_matches('/'),
            area_code
        )
    }
}

#[async_trait]
impl ForecastClient for TsukumijimaClient {
    #[instrument(skip(self))]
    async fn get_forecast(&self, area_code: &str) -> Result<serde_json::Value, ForecastError> {
        let url = self.build_forecast_url(area_code);
        debug!(url = %url, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ForecastError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Forecast request was not successful");
            return Err(ForecastError::HttpStatus(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ForecastError::ParseError(e.to_string()))
    }
}
