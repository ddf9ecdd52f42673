//! Shared HTTP(S) client for the wallet daemon.
//!
//! The client is constructed once at startup via [`WalletRpcClient::connect`],
//! which also performs a `get_info` connectivity probe. A probe failure is a
//! startup failure: the process must not begin serving traffic with a daemon
//! it cannot reach. After construction the client is immutable and safe to
//! share across request handlers behind an `Arc`.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::config::DaemonConfig;
use crate::rpc::types::{RawResponse, WalletRpcRequest, WalletRpcResponse};
use crate::utils::{GatewayError, Result};

#[derive(Debug)]
pub struct WalletRpcClient {
    http: reqwest::Client,
    /// Full URL of the daemon's JSON-RPC endpoint; https iff a CA
    /// certificate was configured.
    endpoint: String,
    /// Basic-auth credentials, recorded only when both user and password
    /// were non-empty at startup.
    auth: Option<(String, String)>,
}

impl WalletRpcClient {
    /// Build the client and verify daemon connectivity with a `get_info`
    /// probe. Later configuration changes are not picked up; the endpoint
    /// is fixed for the process lifetime.
    pub async fn connect(cfg: &DaemonConfig) -> Result<Self> {
        let client = Self::new(cfg)?;

        let probe = WalletRpcRequest::new("get_info", 1);
        let resp = client.send_request(&probe).await?;
        let envelope: WalletRpcResponse = serde_json::from_str(&resp.body).map_err(|e| {
            GatewayError::Daemon(format!("undecodable get_info response: {}", e))
        })?;

        debug!("get_info result: {}", envelope.result);
        info!("connected to wallet daemon at {} ({})", client.endpoint, resp.status);
        Ok(client)
    }

    /// Construct the transport without probing. Used by `connect` and by
    /// tests that exercise failure paths against a dead daemon.
    pub(crate) fn new(cfg: &DaemonConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(cfg.timeout);

        let secure = !cfg.cert_path.is_empty();
        if secure {
            info!("loading daemon CA certificate from {}", cfg.cert_path);
            let pem = std::fs::read(&cfg.cert_path).map_err(|e| {
                GatewayError::Tls(format!("failed to read CA certificate {}: {}", cfg.cert_path, e))
            })?;
            let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                GatewayError::Tls(format!("failed to parse CA certificate {}: {}", cfg.cert_path, e))
            })?;
            // The custom CA is added to the trust store; hostname and chain
            // verification stay enabled.
            builder = builder.add_root_certificate(cert).use_rustls_tls();
        }

        let http = builder.build().map_err(GatewayError::Transport)?;

        let scheme = if secure { "https" } else { "http" };
        let endpoint = format!("{}://{}:{}/json_rpc", scheme, cfg.host, cfg.port);

        let auth = if !cfg.username.is_empty() && !cfg.password.is_empty() {
            info!("basic auth credentials received, enabling basic auth");
            Some((cfg.username.clone(), cfg.password.clone()))
        } else {
            None
        };

        Ok(Self { http, endpoint, auth })
    }

    /// POST one JSON-RPC request to the daemon and return the raw HTTP
    /// status and body. Transport failures are returned as-is; no retries.
    pub async fn send_request(&self, req: &WalletRpcRequest) -> Result<RawResponse> {
        debug!("sending {} request to {}", req.method, self.endpoint);

        let mut http_req = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(req);

        if let Some((user, pass)) = &self.auth {
            http_req = http_req.basic_auth(user, Some(pass));
        }

        let resp = http_req.send().await.map_err(GatewayError::Transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(GatewayError::Transport)?;

        Ok(RawResponse { status, body })
    }

    /// The computed JSON-RPC endpoint URL.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint
    }
}
