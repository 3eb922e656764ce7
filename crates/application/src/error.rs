//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::services::ForecastDay;

/// Errors that can occur while producing a two-day forecast
///
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream answered with a non-200 status
    #[error("API request failed with status code {status}")]
    UpstreamHttp { status: u16 },

    /// Document has no `forecasts` sequence, or it is empty
    #[error("forecast data not found")]
    MissingForecastData,

    /// Fewer than two forecast entries are available
    #[error("insufficient forecast data")]
    IncompleteForecastData,

    /// A required field is absent on a present forecast entry
    #[error("server error: {day} forecast is missing `{field}`")]
    FieldAccess {
        day: ForecastDay,
        field: &'static str,
    },

    /// Transport failure or any other unexpected condition
    #[error("server error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a field access error
    pub const fn field_access(day: ForecastDay, field: &'static str) -> Self {
        Self::FieldAccess { day, field }
    }
}
