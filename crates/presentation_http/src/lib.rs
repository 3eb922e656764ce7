//! Weather relay HTTP presentation layer
//!
//! This crate provides the HTTP API consumed by the front-end.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{create_app, create_router};
pub use server::serve_with_drain;
pub use state::AppState;
