//! Helpdesk API server lifecycle: starts/stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::api::router::helpdesk_router;
use crate::api::types::ApiContext;

/// Handle to a running helpdesk server.
pub struct HelpdeskServer {
    pub session_id: String,
    pub addr: SocketAddr,
    pub started_at: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl HelpdeskServer {
    /// Send the graceful shutdown signal. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Helpdesk server shutdown signal sent");
        }
    }

    /// Wait until the serve loop has exited.
    pub async fn stopped(self) {
        if let Err(e) = self.task.await {
            tracing::error!("Helpdesk server task failed: {e}");
        }
    }
}

/// Bind `addr`, mount the helpdesk router and serve in a background task.
///
/// Port 0 binds an ephemeral port; the bound address is on the handle.
pub async fn start_server(ctx: ApiContext, addr: SocketAddr) -> std::io::Result<HelpdeskServer> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;

    let app = helpdesk_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Helpdesk server received shutdown signal");
        };

        tracing::info!(%addr, "Helpdesk server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Helpdesk server error: {e}");
        }

        tracing::info!("Helpdesk server stopped");
    });

    Ok(HelpdeskServer {
        session_id: Uuid::new_v4().to_string(),
        addr,
        started_at: chrono::Utc::now().to_rfc3339(),
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
