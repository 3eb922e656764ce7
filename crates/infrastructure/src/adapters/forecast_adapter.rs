//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::AreaId;
use integration_weather::{ForecastClient, ForecastConfig, ForecastError, TsukumijimaClient};
use tracing::{debug, instrument};

/// Adapter for the upstream city forecast API
#[derive(Debug)]
pub struct ForecastAdapter {
    client: TsukumijimaClient,
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(ForecastConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: ForecastConfig) -> Result<Self, ApplicationError> {
        let client = TsukumijimaClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration forecast error to application error
    fn map_error(err: ForecastError) -> ApplicationError {
        match err {
            ForecastError::HttpStatus(status) => ApplicationError::UpstreamHttp { status },
            ForecastError::ConnectionFailed(e)
            | ForecastError::RequestFailed(e)
            | ForecastError::ParseError(e) => ApplicationError::Internal(e),
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip_all, fields(area = %area))]
    async fn fetch_forecast(&self, area: &AreaId) -> Result<serde_json::Value, ApplicationError> {
        let result = self
            .client
            .get_forecast(area.as_str())
            .await
            .map_err(Self::map_error);

        if let Err(e) = &result {
            debug!(error = %e, "Failed to fetch forecast document");
        }

        result
    }
}
