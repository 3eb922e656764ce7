//! Domain layer for the weather relay
//!
//! Contains the two-day forecast summary, its value objects, and domain errors.
//! This layer has no knowledge of HTTP or of the upstream document shape.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
