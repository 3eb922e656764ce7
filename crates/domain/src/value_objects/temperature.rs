//! Temperature value object
//!
//! A forecast temperature as surfaced to the client: the upstream celsius
//! reading, an explicit `null`, or a sentinel string when no reading exists.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{NullCheck, Sentinel, Temperature};
//!
//! let max = Temperature::resolve(Some(Some("22")), NullCheck::PresenceOnly, Sentinel::NotAvailable);
//! assert_eq!(max, Temperature::Celsius("22".to_string()));
//!
//! let min = Temperature::resolve(Some(None), NullCheck::RequireValue, Sentinel::NoData);
//! assert_eq!(min, Temperature::Missing(Sentinel::NoData));
//! ```

use serde::{Serialize, Serializer};

/// Placeholder strings standing in for a missing temperature
///
/// The two markers are deliberately distinct: the front-end tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// `"N/A"`: the temperature object itself is absent
    NotAvailable,
    /// `"データなし"`: the temperature object exists but carries no value
    NoData,
}

impl Sentinel {
    /// Get the wire representation of the sentinel
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotAvailable => "N/A",
            Self::NoData => "データなし",
        }
    }
}

/// How strictly a temperature reading is checked before it is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullCheck {
    /// Use the reading whenever the temperature object exists,
    /// even if its celsius value is null
    #[default]
    PresenceOnly,
    /// Use the reading only if the object exists and celsius is not null
    RequireValue,
}

/// A temperature slot in a daily summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Temperature {
    /// Celsius value as reported upstream, e.g. `"22"`
    Celsius(String),
    /// The object exists but its celsius value is null; serialized as `null`
    Unreported,
    /// No usable reading; serialized as the sentinel string
    Missing(Sentinel),
}

impl Temperature {
    /// Resolve a reading into a temperature slot
    ///
    /// `reading` is `None` when the temperature object is absent and
    /// `Some(None)` when the object exists with a null celsius value.
    #[must_use]
    pub fn resolve(reading: Option<Option<&str>>, check: NullCheck, fallback: Sentinel) -> Self {
        match (reading, check) {
            (Some(Some(celsius)), _) => Self::Celsius(celsius.to_owned()),
            (Some(None), NullCheck::PresenceOnly) => Self::Unreported,
            (Some(None), NullCheck::RequireValue) | (None, _) => Self::Missing(fallback),
        }
    }

    /// Get the celsius reading, if one was reported
    #[must_use]
    pub fn celsius(&self) -> Option<&str> {
        match self {
            Self::Celsius(value) => Some(value),
            Self::Unreported | Self::Missing(_) => None,
        }
    }
}

impl Serialize for Temperature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Celsius(value) => serializer.serialize_str(value),
            Self::Unreported => serializer.serialize_none(),
            Self::Missing(sentinel) => serializer.serialize_str(sentinel.as_str()),
        }
    }
}
