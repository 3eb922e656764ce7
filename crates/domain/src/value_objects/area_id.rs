//! Area identifier value object
//!
//! Identifies a forecast area (city) on the upstream provider.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::AreaId;
//!
//! let id = AreaId::new("130010").expect("valid area id");
//! assert_eq!(id.as_str(), "130010");
//!
//! // Leading zeros are part of the code and are kept
//! let sapporo: AreaId = "016010".parse().expect("valid area id");
//! assert_eq!(sapporo.to_string(), "016010");
//!
//! assert!(AreaId::new("-1").is_err());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated, non-negative integer area code
///
/// The digit string is kept as received so that zero-padded codes
/// reach the upstream provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AreaId(String);

impl AreaId {
    /// Create a new area id from a string of ASCII digits
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAreaId` if the value is empty or
    /// contains anything other than ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAreaId(value));
        }
        Ok(Self(value))
    }

    /// Get the area code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AreaId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AreaId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AreaId> for String {
    fn from(id: AreaId) -> Self {
        id.0
    }
}
