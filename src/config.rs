//! Process configuration, loaded from the environment at startup.
//!
//! Everything is optional with conservative localhost defaults, so a bare
//! `xmr-gateway` next to a local monerod works out of the box. The daemon
//! side of the config is immutable after startup; there is no reload.

use std::time::Duration;

use crate::utils::{GatewayError, Result};

/// Default per-call timeout for outbound daemon requests.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the wallet daemon.
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub host: String,
    pub port: u16,
    /// Path to a PEM CA certificate. Non-empty switches the endpoint to
    /// HTTPS with that certificate added to the trust store.
    pub cert_path: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

/// Full gateway configuration: serving address plus daemon target.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub daemon: DaemonConfig,
}

impl GatewayConfig {
    /// Read configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("HOST", "127.0.0.1"),
            port: parse_port("PORT", "8080")?,
            daemon: DaemonConfig {
                host: env_or("DAEMON_HOST", "127.0.0.1"),
                port: parse_port("DAEMON_PORT", "18081")?,
                cert_path: env_or("DAEMON_CERT_PATH", ""),
                username: env_or("DAEMON_RPC_USER", ""),
                password: env_or("DAEMON_RPC_PASS", ""),
                timeout: RPC_TIMEOUT,
            },
        })
    }

    /// Serving address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_port(key: &str, default: &str) -> Result<u16> {
    env_or(key, default)
        .parse::<u16>()
        .map_err(|e| GatewayError::Config(format!("invalid {}: {}", key, e)))
}
