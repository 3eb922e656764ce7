//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Area identifier is not a non-negative integer
    #[error("Invalid area id: {0:?} (expected a non-negative integer)")]
    InvalidAreaId(String),
}
