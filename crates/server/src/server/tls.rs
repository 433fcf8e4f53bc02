//! TLS listener setup using rustls with a pre-generated certificate.
//!
//! The demo terminates TLS with a certificate/key pair generated ahead of
//! time (e.g. a self-signed pair from openssl). This module loads the PEM
//! files and constructs a `rustls::ServerConfig`; every failure here is
//! fatal and happens before the listener binds.

use anyhow::{Context, Result};
use rustls::ServerConfig;
use std::path::Path;
use std::sync::Arc;

/// Load certificate and key PEM files and build the server TLS config.
///
/// # Errors
///
/// Returns an error if either file is missing or unreadable, or if the
/// material fails parsing or consistency validation.
pub fn load_server_config(cert_path: &Path, key_path: &Path) -> Result<Arc<ServerConfig>> {
    let cert_pem = std::fs::read(cert_path)
        .with_context(|| format!("failed to read certificate file {}", cert_path.display()))?;
    let key_pem = std::fs::read(key_path)
        .with_context(|| format!("failed to read private key file {}", key_path.display()))?;

    build_server_config(&cert_pem, &key_pem)
}

/// Build a [`rustls::ServerConfig`] from PEM-encoded certificate and private
/// key bytes.
///
/// # Errors
///
/// Returns an error if the certificate or key cannot be parsed, or if rustls
/// rejects the configuration — including a private key that does not match
/// the certificate's public key.
pub fn build_server_config(cert_pem: &[u8], key_pem: &[u8]) -> Result<Arc<ServerConfig>> {
    let certs = rustls_pemfile::certs(&mut std::io::BufReader::new(cert_pem))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to parse TLS certificate chain")?;
    if certs.is_empty() {
        anyhow::bail!("no certificates found in PEM data");
    }

    let key = rustls_pemfile::private_key(&mut std::io::BufReader::new(key_pem))
        .context("failed to read TLS private key")?
        .context("no private key found in PEM data")?;

    let config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .context("failed to build rustls ServerConfig")?;

    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERT: &[u8] = include_bytes!("../../testdata/cert.pem");
    const KEY: &[u8] = include_bytes!("../../testdata/key.pem");
    const OTHER_KEY: &[u8] = include_bytes!("../../testdata/other_key.pem");

    #[test]
    fn accepts_matching_pair() {
        assert!(build_server_config(CERT, KEY).is_ok());
    }

    #[test]
    fn rejects_mismatched_key() {
        assert!(build_server_config(CERT, OTHER_KEY).is_err());
    }

    #[test]
    fn rejects_empty_cert_pem() {
        assert!(build_server_config(b"", b"").is_err());
    }

    #[test]
    fn rejects_garbage_pem() {
        assert!(build_server_config(b"not a pem", b"also not a pem").is_err());
    }

    #[test]
    fn missing_files_fail_load() {
        let result = load_server_config(
            Path::new("/no/such/cert.pem"),
            Path::new("/no/such/key.pem"),
        );
        assert!(result.is_err());
    }
}
