//! Documentation HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use hirestack_docs_telemetry::{log_listening, log_shutdown};
use tokio::net::TcpListener;

use crate::api::create_router;
use crate::shell::ShellPage;

/// Server configuration.
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub shell: ShellPage,
}

/// Run the documentation server until Ctrl-C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let viewer = config.shell.viewer();
    let title = config.shell.title().to_string();
    let app = create_router(Arc::new(config.shell));

    let listener = TcpListener::bind(config.listen_addr).await?;
    log_listening!(
        addr = %config.listen_addr,
        viewer = viewer.as_str(),
        title = %title,
        "Documentation server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_shutdown!("Documentation server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
