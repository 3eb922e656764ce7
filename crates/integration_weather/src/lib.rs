//! Tsukumijima forecast integration
//!
//! Client for the livedoor-compatible forecast API (<https://weather.tsukumijima.net>).
//! Returns the raw forecast document; shaping it is left to the caller.

pub mod client;

pub use client::{ForecastClient, ForecastConfig, ForecastError, TsukumijimaClient};
