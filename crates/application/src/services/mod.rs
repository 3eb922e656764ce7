//! Application services

mod forecast_normalizer;
mod forecast_service;

pub use forecast_normalizer::{ForecastDay, ForecastNormalizer, NormalizerConfig};
pub use forecast_service::ForecastService;
