use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::files::FileStore;
use crate::http::connection::Connection;
use crate::routing::Router;

/// Bind the configured address and serve until the task is dropped.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let router = Router::new(FileStore::new(cfg.directory.clone()))
        .context("Failed to compile route patterns")?;

    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);
    info!("Serving files from {}", cfg.directory);

    serve(listener, Arc::new(router)).await
}

/// Accept connections forever, one task per connection.
pub async fn serve(listener: TcpListener, router: Arc<Router>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Failed to accept connection: {}", e);
                continue;
            }
        };
        tracing::debug!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
