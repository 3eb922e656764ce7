//! Entities - request-scoped results built from an upstream forecast

mod daily_summary;

pub use daily_summary::{DailySummary, TwoDayForecast};
