//! Application layer - Use cases and orchestration
//!
//! Contains the forecast normalization use case and the port through which
//! the raw upstream document is fetched.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
