//! Serve command - run the webhook and setup routes on a local address.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use crate::cli::output;
use crate::error::{Error, Result};
use crate::runtime::{LogUpdates, Options, TgVercel};

/// Serve until interrupted. All configuration comes from the process environment.
pub fn execute(bind: SocketAddr) -> Result<()> {
    let runtime = TgVercel::new(Options::default())?;
    let webhook = runtime.options().webhook_relative_url.clone();
    let setup = runtime.options().setup_relative_url.clone();
    let app = runtime.router(Arc::new(LogUpdates));

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let listener = tokio::net::TcpListener::bind(bind).await?;
        let addr = listener.local_addr()?;

        output::success(&format!("listening on http://{addr}"));
        output::kv("webhook:", format!("POST {webhook}"));
        output::kv("setup:  ", format!("GET  {setup}"));
        info!(%addr, "serving");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok::<_, Error>(())
    })
}

/// Resolves on ctrl-c. If the handler cannot be installed the server keeps
/// running instead of shutting down at once.
pub(crate) async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
