//! Configuration loading and validation.
//!
//! All values are read from environment variables at startup, and every field
//! carries a default reproducing the reference setup (`cert.pem` / `key.pem` /
//! `static` / port 8443), so the demo runs with no configuration at all. The
//! process exits with a clear error message if a value is present but invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Filesystem path to the PEM-encoded TLS certificate chain.
    #[serde(default = "default_tls_cert_path")]
    pub tls_cert_path: String,

    /// Filesystem path to the PEM-encoded TLS private key.
    #[serde(default = "default_tls_key_path")]
    pub tls_key_path: String,

    /// Directory whose contents are served verbatim by relative path.
    #[serde(default = "default_static_root")]
    pub static_root: String,

    /// Port the HTTPS listener binds on.
    #[serde(default = "default_tls_port")]
    pub tls_port: u16,

    /// Tracing log level used when `RUST_LOG` is unset (e.g. `"info"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tls_cert_path() -> String {
    "cert.pem".into()
}
fn default_tls_key_path() -> String {
    "key.pem".into()
}
fn default_static_root() -> String {
    "static".into()
}
fn default_tls_port() -> u16 {
    8443
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but cannot be parsed, or
    /// if validation fails.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.tls_cert_path, "TLS_CERT_PATH")?;
        ensure_non_empty(&self.tls_key_path, "TLS_KEY_PATH")?;
        ensure_non_empty(&self.static_root, "STATIC_ROOT")?;

        if self.tls_port == 0 {
            anyhow::bail!("TLS_PORT must be a non-zero port number");
        }
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_setup() {
        assert_eq!(default_tls_cert_path(), "cert.pem");
        assert_eq!(default_tls_key_path(), "key.pem");
        assert_eq!(default_static_root(), "static");
        assert_eq!(default_tls_port(), 8443);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_cert_path() {
        let cfg = Config {
            tls_cert_path: "  ".into(),
            tls_key_path: default_tls_key_path(),
            static_root: default_static_root(),
            tls_port: default_tls_port(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let cfg = Config {
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: default_tls_key_path(),
            static_root: default_static_root(),
            tls_port: 0,
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let cfg = Config {
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: default_tls_key_path(),
            static_root: default_static_root(),
            tls_port: default_tls_port(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
    }
}
