//! Shared state and serving.

use std::net::SocketAddr;
use std::sync::Arc;

use adaki_sdm::MasterKey;
use adaki_tag_store::TagStore;
use tracing::info;

use crate::routes;

/// Shared state handed to every route handler.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Master key tags are provisioned under; read-only for the process
    /// lifetime
    pub master_key: MasterKey,
    /// Persistence collaborator for registered tags
    pub store: Arc<dyn TagStore>,
}

/// Serve the API on `addr` until ctrl-c.
pub async fn run(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
