//! Area forecast handler

use axum::{
    Json,
    extract::{Path, State},
};
use domain::{AreaId, TwoDayForecast};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Two-day forecast for an area
///
/// `GET /api/areainfo/{id}`
///
/// A non-numeric id is answered with 400 and the usual `{"error": ...}` body
/// rather than a bare 404 from an unmatched route. This status is an
/// addition on top of the 200/500 contract of the endpoint.
#[instrument(skip(state))]
pub async fn area_forecast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TwoDayForecast>, ApiError> {
    let area = AreaId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let forecast = state.forecast_service.two_day_forecast(&area).await?;

    Ok(Json(forecast))
}
