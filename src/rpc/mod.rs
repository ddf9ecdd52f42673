//! Wallet daemon RPC module
//!
//! - JSON-RPC 2.0 request/response envelopes for the Monero wallet daemon
//! - `WalletRpcClient`: the shared outbound HTTP(S) client, built once at
//!   startup with a `get_info` connectivity probe

pub mod client;
pub mod types;

pub use client::WalletRpcClient;
pub use types::{RawResponse, WalletRpcRequest, WalletRpcResponse};
