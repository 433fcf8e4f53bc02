//! `tls-static-server` — binary entry point.
//!
//! A demonstration HTTPS server for packet-capture exercises: terminates TLS
//! with a pre-generated certificate and serves a static asset tree, plus one
//! fixed informational route at `/`.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise the tracing subscriber.
//! 3. Load certificate material and build the rustls config (fatal on error).
//! 4. Build the Axum router and start the TLS accept loop.

mod assets;
mod config;
mod error;
mod server;
mod telemetry;

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use config::Config;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        tls_port = cfg.tls_port,
        static_root = %cfg.static_root,
        "tls-static-server starting"
    );

    // -----------------------------------------------------------------------
    // 3. TLS setup — any failure here terminates before the listener binds.
    // -----------------------------------------------------------------------
    let tls_config = server::tls::load_server_config(
        Path::new(&cfg.tls_cert_path),
        Path::new(&cfg.tls_key_path),
    )?;

    if !Path::new(&cfg.static_root).is_dir() {
        warn!(
            static_root = %cfg.static_root,
            "static root does not exist; asset requests will return 404"
        );
    }

    // -----------------------------------------------------------------------
    // 4. HTTPS server
    // -----------------------------------------------------------------------
    let state = AppState::new(cfg.static_root.as_str());
    let router = server::router::build(state);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.tls_port).into();
    server::listen::run(addr, tls_config, router).await
}
