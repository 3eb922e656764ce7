//! Listener lifecycle

use std::{future::IntoFuture, io, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then drain in-flight requests
///
/// Connections still open after `drain_timeout` are dropped and the call
/// returns `Ok(())`.
pub async fn serve_with_drain<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            stop_rx.await.ok();
        })
        .into_future();
    let mut server = std::pin::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        () = shutdown => {}
    }

    stop_tx.send(()).ok();
    info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);

    if let Ok(result) = tokio::time::timeout(drain_timeout, server).await {
        result
    } else {
        warn!(
            timeout_secs = drain_timeout.as_secs_f64(),
            "Shutdown timeout elapsed, dropping open connections"
        );
        Ok(())
    }
}
