//! HTTP server startup logic.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the listening socket.
///
/// Fails immediately if the address is already in use or the process lacks
/// the privilege to bind it.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until `signal` resolves.
///
/// In-flight connections are drained before this returns.
pub async fn serve<F>(listener: TcpListener, app: Router, signal: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Start the HTTP server on `addr`.
///
/// This function blocks until the server shuts down on SIGTERM/SIGINT.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "Starting HTTP server at http://{}", local_addr);

    serve(listener, app, shutdown::shutdown_signal()).await
}
