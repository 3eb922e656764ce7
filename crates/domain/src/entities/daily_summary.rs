//! Daily forecast summary entities
//!
//! The normalized shape returned to the front-end. Field names on the wire
//! are the labels the client renders directly.

use serde::Serialize;

use crate::value_objects::{RainChance, Temperature};

/// One day of the normalized forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// Calendar date, passed through from upstream
    pub date: String,
    /// Short weather description (telop)
    #[serde(rename = "天気")]
    pub description: String,
    /// Maximum temperature
    #[serde(rename = "最高気温")]
    pub max_temperature: Temperature,
    /// Minimum temperature
    #[serde(rename = "最低気温")]
    pub min_temperature: Temperature,
    /// Average chance of rain over the day
    #[serde(rename = "降水確率")]
    pub rain_chance: RainChance,
    /// Weather icon URL
    pub image_url: String,
}

/// Today's and tomorrow's summaries, keyed by label rather than index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoDayForecast {
    #[serde(rename = "weatherinfotoday")]
    pub today: DailySummary,
    #[serde(rename = "weatherinfotomorrow")]
    pub tomorrow: DailySummary,
}
