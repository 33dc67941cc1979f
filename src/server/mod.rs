//! HTTP endpoint for on-demand audits.
//!
//! Provides two endpoints:
//! - `/api/audit?url=...` - Audits a page and returns the JSON report
//! - `/health` - Liveness probe

mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::Auditor;
use handlers::{audit_handler, health_handler};
pub use types::{AuditQuery, ErrorBody, ServerState};

/// Builds the endpoint's router.
pub fn router(auditor: Arc<Auditor>) -> Router {
    Router::new()
        .route("/api/audit", get(audit_handler))
        .route("/health", get(health_handler))
        .with_state(ServerState { auditor })
}

/// Binds `bind:port` and serves audits until the process exits.
pub async fn serve(bind: &str, port: u16, auditor: Arc<Auditor>) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind((bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind audit server to {}:{}: {}", bind, port, e))?;
    serve_on(listener, auditor).await
}

/// Serves audits on an already bound listener.
pub async fn serve_on(listener: TcpListener, auditor: Arc<Auditor>) -> Result<(), anyhow::Error> {
    let addr = listener.local_addr()?;
    log::info!("Audit server listening on http://{}/", addr);
    log::info!("  - Audit: http://{}/api/audit?url=example.com", addr);
    log::info!("  - Health: http://{}/health", addr);

    axum::serve(listener, router(auditor))
        .await
        .map_err(|e| anyhow::anyhow!("Audit server error: {}", e))?;

    Ok(())
}
