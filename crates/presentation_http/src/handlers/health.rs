//! Health check handlers

/// Plain-text liveness message
pub const LIVENESS_MESSAGE: &str = "Weather relay API is running!";

/// Liveness check - is the server running?
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
