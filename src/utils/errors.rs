use thiserror::Error;

/// Unified error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Daemon error: {0}")]
    Daemon(String),
}

/// Convenience alias
pub type Result<T> = std::result::Result<T, GatewayError>;
