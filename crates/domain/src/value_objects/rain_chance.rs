//! Rain chance value object
//!
//! Collapses the four six-hour precipitation buckets reported for a day
//! into a single representative percentage.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::RainChance;
//!
//! let chance = RainChance::from_buckets([Some("10%"), Some("--"), Some("30%"), Some("")]);
//! assert!((chance.value() - 10.0).abs() < f64::EPSILON);
//! ```

use std::fmt;

use serde::Serialize;

/// Average chance of rain over a day, in percent (0-100)
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct RainChance(f64);

impl RainChance {
    /// Number of six-hour buckets in a day
    pub const BUCKETS: usize = 4;

    /// Upstream marker for a bucket without data
    pub const NO_DATA: &'static str = "--";

    /// Maximum valid percentage for a single bucket
    pub const MAX_PERCENT: u8 = 100;

    /// Average the four buckets (00-06, 06-12, 12-18, 18-24)
    ///
    /// Never fails: every bucket that cannot be read contributes 0.
    #[must_use]
    pub fn from_buckets(buckets: [Option<&str>; Self::BUCKETS]) -> Self {
        let total: u32 = buckets
            .into_iter()
            .map(|bucket| u32::from(Self::bucket_percent(bucket)))
            .sum();
        Self(f64::from(total) / 4.0)
    }

    /// Read a single bucket such as `"30%"`
    ///
    /// Missing, empty, `"--"`, unparsable and out-of-range values read as 0.
    #[must_use]
    pub fn bucket_percent(raw: Option<&str>) -> u8 {
        let Some(raw) = raw.map(str::trim) else {
            return 0;
        };
        if raw.is_empty() || raw == Self::NO_DATA {
            return 0;
        }

        raw.strip_suffix('%')
            .unwrap_or(raw)
            .parse::<u8>()
            .ok()
            .filter(|percent| *percent <= Self::MAX_PERCENT)
            .unwrap_or(0)
    }

    /// Get the raw (unrounded) average
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for RainChance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
