//! Forecast normalization
//!
//! Turns a raw upstream forecast document into today's and tomorrow's
//! summaries. Normalization is all-or-nothing: either both days are
//! produced or a typed error explains why not.
//!
//! Temperature reads are asymmetric between the two days. Today's minimum
//! requires a non-null celsius value and falls back to `"データなし"`; every
//! other slot only requires the temperature object to carry a `celsius` key
//! and falls back to `"N/A"`. `NormalizerConfig::uniform_null_check` applies the strict
//! check to all four slots while keeping each slot's sentinel.

use std::fmt;

use domain::{DailySummary, NullCheck, RainChance, Sentinel, Temperature, TwoDayForecast};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ApplicationError;

/// Position of an entry in the two-day window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastDay {
    /// Offset 0
    Today,
    /// Offset 1
    Tomorrow,
}

impl ForecastDay {
    /// Index of this day in the upstream `forecasts` sequence
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
        }
    }

    /// Lowercase label used in logs and error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
        }
    }

    /// Null checks applied to the (max, min) readings
    const fn null_checks(self, uniform: bool) -> (NullCheck, NullCheck) {
        if uniform {
            return (NullCheck::RequireValue, NullCheck::RequireValue);
        }
        match self {
            Self::Today => (NullCheck::PresenceOnly, NullCheck::RequireValue),
            Self::Tomorrow => (NullCheck::PresenceOnly, NullCheck::PresenceOnly),
        }
    }

    /// Fallback sentinels for the (max, min) readings
    const fn sentinels(self) -> (Sentinel, Sentinel) {
        match self {
            Self::Today => (Sentinel::NotAvailable, Sentinel::NoData),
            Self::Tomorrow => (Sentinel::NotAvailable, Sentinel::NotAvailable),
        }
    }
}

impl fmt::Display for ForecastDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizer configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Require a non-null celsius value on every temperature read (default: false)
    #[serde(default)]
    pub uniform_null_check: bool,
}

/// One element of the upstream `forecasts` sequence
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    date: Option<String>,
    telop: Option<String>,
    temperature: Option<RawTemperatures>,
    image: Option<RawImage>,
    chance_of_rain: Option<RawChanceOfRain>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTemperatures {
    max: Option<RawReading>,
    min: Option<RawReading>,
}

#[derive(Debug, Deserialize)]
struct RawReading {
    /// `None` when the key is absent, `Some(Value::Null)` when it is null
    #[serde(default, deserialize_with = "present")]
    celsius: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RawReading {
    /// Celsius as text; numbers are rendered, anything else reads as null.
    ///
    /// A reading without a `celsius` key (e.g. `{}`) counts as absent.
    fn celsius(&self) -> Option<Option<String>> {
        self.celsius.as_ref().map(|value| match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawImage {
    url: Option<String>,
}

/// Bucket values stay untyped so a wrong type reads as "no data"
#[derive(Debug, Default, Deserialize)]
struct RawChanceOfRain {
    #[serde(rename = "T00_06")]
    t00_06: Option<Value>,
    #[serde(rename = "T06_12")]
    t06_12: Option<Value>,
    #[serde(rename = "T12_18")]
    t12_18: Option<Value>,
    #[serde(rename = "T18_24")]
    t18_24: Option<Value>,
}

impl RawChanceOfRain {
    fn average(&self) -> RainChance {
        RainChance::from_buckets([
            bucket_text(self.t00_06.as_ref()),
            bucket_text(self.t06_12.as_ref()),
            bucket_text(self.t12_18.as_ref()),
            bucket_text(self.t18_24.as_ref()),
        ])
    }
}

fn bucket_text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

fn resolve_temperature(
    reading: Option<&RawReading>,
    check: NullCheck,
    fallback: Sentinel,
) -> Temperature {
    let celsius = reading.and_then(RawReading::celsius);
    Temperature::resolve(celsius.as_ref().map(Option::as_deref), check, fallback)
}

/// Normalizes upstream forecast documents into two-day summaries
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastNormalizer {
    config: NormalizerConfig,
}

impl ForecastNormalizer {
    /// Create a normalizer with the given configuration
    #[must_use]
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalize a raw forecast document
    ///
    /// # Errors
    ///
    /// - `MissingForecastData` if `forecasts` is absent, not a sequence, or empty
    /// - `IncompleteForecastData` if tomorrow's entry is missing
    /// - `FieldAccess` if `date`, `telop` or `image.url` is missing on an entry
    /// - `Internal` if an entry is not shaped like a forecast at all
    pub fn normalize(&self, document: &Value) -> Result<TwoDayForecast, ApplicationError> {
        let forecasts = document
            .get("forecasts")
            .and_then(Value::as_array)
            .filter(|entries| !entries.is_empty())
            .ok_or(ApplicationError::MissingForecastData)?;

        let (Some(today), Some(tomorrow)) = (
            forecasts.get(ForecastDay::Today.offset()),
            forecasts.get(ForecastDay::Tomorrow.offset()),
        ) else {
            return Err(ApplicationError::IncompleteForecastData);
        };

        Ok(TwoDayForecast {
            today: self.summarize(ForecastDay::Today, today)?,
            tomorrow: self.summarize(ForecastDay::Tomorrow, tomorrow)?,
        })
    }

    fn summarize(&self, day: ForecastDay, entry: &Value) -> Result<DailySummary, ApplicationError> {
        let entry = RawEntry::deserialize(entry).map_err(|e| {
            ApplicationError::Internal(format!("malformed {day} forecast entry: {e}"))
        })?;

        let date = entry
            .date
            .ok_or_else(|| ApplicationError::field_access(day, "date"))?;
        let description = entry
            .telop
            .ok_or_else(|| ApplicationError::field_access(day, "telop"))?;
        let image_url = entry
            .image
            .and_then(|image| image.url)
            .ok_or_else(|| ApplicationError::field_access(day, "image.url"))?;

        let (max_check, min_check) = day.null_checks(self.config.uniform_null_check);
        let (max_fallback, min_fallback) = day.sentinels();
        let temperatures = entry.temperature.unwrap_or_default();
        let max_temperature = resolve_temperature(temperatures.max.as_ref(), max_check, max_fallback);
        let min_temperature = resolve_temperature(temperatures.min.as_ref(), min_check, min_fallback);

        let rain_chance = entry.chance_of_rain.unwrap_or_default().average();

        debug!(
            day = %day,
            date = %date,
            rain_chance = rain_chance.value(),
            "Normalized forecast entry"
        );

        Ok(DailySummary {
            date,
            description,
            max_temperature,
            min_temperature,
            rain_chance,
            image_url,
        })
    }
}
