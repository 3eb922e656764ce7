//! Forecast source port
//!
//! Defines how the raw upstream forecast document is retrieved.

use async_trait::async_trait;
use domain::AreaId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching raw forecast documents
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the upstream forecast document for an area
    ///
    /// The document is returned as-is; validation happens during normalization.
    async fn fetch_forecast(&self, area: &AreaId) -> Result<serde_json::Value, ApplicationError>;
}
