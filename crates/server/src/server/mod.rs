//! HTTPS server: TLS setup, routing, and the accept loop.
//!
//! # Responsibilities
//! - Load certificate material and build the rustls server config.
//! - Define the Axum router: the fixed `/` route plus the static fallback.
//! - Accept TCP connections, terminate TLS, and serve HTTP/1.1 per task.

pub mod handlers;
pub mod listen;
pub mod router;
pub mod state;
pub mod tls;
