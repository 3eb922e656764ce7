//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and loads the
//! process configuration.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use crate::config::{AppConfig, ServerConfig};
