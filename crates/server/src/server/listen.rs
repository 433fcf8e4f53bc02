//! TCP accept loop with TLS termination.
//!
//! Each accepted connection is handled in its own task: rustls handshake,
//! then HTTP/1.1 over the decrypted stream. A failure on one connection
//! never affects the listener or other connections.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use rustls::ServerConfig;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tracing::{debug, error, info};

/// Bind `addr` and serve `router` over TLS until the process is stopped.
///
/// # Errors
///
/// Returns an error only if the initial bind fails. Accept, handshake, and
/// per-connection HTTP errors are logged and contained.
pub async fn run(addr: SocketAddr, tls_config: Arc<ServerConfig>, router: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let acceptor = TlsAcceptor::from(tls_config);

    info!(%addr, "listening for HTTPS connections");

    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!(error = %e, "failed to accept connection");
                continue;
            }
        };

        let acceptor = acceptor.clone();
        let router = router.clone();

        tokio::spawn(async move {
            // Clients probing with plaintext HTTP fail here; log and move on.
            let tls_stream = match acceptor.accept(stream).await {
                Ok(s) => s,
                Err(e) => {
                    debug!(%peer_addr, error = %e, "TLS handshake failed");
                    return;
                }
            };

            let service = TowerToHyperService::new(router);
            let io = TokioIo::new(tls_stream);

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                debug!(%peer_addr, error = %e, "connection closed with error");
            }
        });
    }
}
