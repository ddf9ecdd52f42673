use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC 2.0 request as the wallet daemon expects it.
#[derive(Debug, Clone, Serialize)]
pub struct WalletRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Map<String, Value>,
    pub id: u64,
}

impl WalletRpcRequest {
    /// Build a parameterless call to `method`.
    pub fn new(method: &str, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params: Map::new(),
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope (simplified: only `result` is inspected,
/// and only on the connectivity probe).
#[derive(Debug, Deserialize)]
pub struct WalletRpcResponse {
    #[serde(default)]
    pub result: Value,
}

/// Raw HTTP outcome of a daemon call, kept undecoded for relaying.
#[derive(Debug)]
pub struct RawResponse {
    pub status: reqwest::StatusCode,
    pub body: String,
}
