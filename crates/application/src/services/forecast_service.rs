//! Forecast service - fetch and normalize pipeline
//!
//! One call performs exactly one upstream fetch followed by normalization.
//! No caching, no retries.

use std::{fmt, sync::Arc};

use domain::{AreaId, TwoDayForecast};
use tracing::{debug, instrument, warn};

use super::forecast_normalizer::ForecastNormalizer;
use crate::{error::ApplicationError, ports::ForecastPort};

/// Produces two-day forecasts for an area
pub struct ForecastService {
    source: Arc<dyn ForecastPort>,
    normalizer: ForecastNormalizer,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field("source", &"<ForecastPort>")
            .field("normalizer", &self.normalizer)
            .finish()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(source: Arc<dyn ForecastPort>, normalizer: ForecastNormalizer) -> Self {
        Self { source, normalizer }
    }

    /// Fetch and normalize the forecast for an area
    #[instrument(skip_all, fields(area = %area))]
    pub async fn two_day_forecast(
        &self,
        area: &AreaId,
    ) -> Result<TwoDayForecast, ApplicationError> {
        let document = self.source.fetch_forecast(area).await.inspect_err(|e| {
            warn!(error = %e, "Failed to fetch forecast");
        })?;

        debug!(payload = %document, "Received upstream forecast");

        self.normalizer.normalize(&document).inspect_err(|e| {
            warn!(error = %e, "Failed to normalize forecast");
        })
    }
}
