//! Application configuration
//!
//! Split into focused sections:
//! - `server`: HTTP listener and logging settings
//! - `forecast`: upstream forecast API settings
//! - `normalizer`: forecast normalization switches
//!
//! Sources, in increasing priority: built-in defaults, an optional
//! `config.toml` in the working directory, then `WEATHER_RELAY_*`
//! environment variables (e.g. `WEATHER_RELAY_SERVER__PORT=8080`).

mod server;

use application::NormalizerConfig;
use integration_weather::ForecastConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WEATHER_RELAY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream forecast API configuration
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Forecast normalization configuration
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(config::File::with_name("config").required(false))
    }

    fn load_with<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., WEATHER_RELAY_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
