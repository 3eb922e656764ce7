//! Weather relay HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{ForecastNormalizer, ForecastService};
use infrastructure::{AppConfig, ForecastAdapter};
use presentation_http::{create_app, serve_with_drain, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();

    init_tracing(config.as_ref().is_ok_and(|c| c.server.json_logs()));

    info!("🌦️ Weather relay v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.forecast.base_url,
        uniform_null_check = config.normalizer.uniform_null_check,
        "Configuration loaded"
    );

    let adapter = ForecastAdapter::with_config(config.forecast.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize forecast client: {e}"))?;

    let forecast_service = ForecastService::new(
        Arc::new(adapter),
        ForecastNormalizer::new(config.normalizer),
    );

    let state = AppState {
        forecast_service: Arc::new(forecast_service),
    };

    let app = create_app(state);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    serve_with_drain(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Log filter used when `RUST_LOG` is unset; covers every workspace crate
const DEFAULT_LOG_DIRECTIVES: &str = "weather_relay=debug,presentation_http=debug,\
     application=debug,infrastructure=debug,integration_weather=debug,tower_http=debug";

/// Install the global tracing subscriber
fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVES.into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
