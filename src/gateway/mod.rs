//! Gateway module
//!
//! - `GET /` relays a fixed `get_address` JSON-RPC call to the wallet daemon
//! - Diagnostic endpoint: `/health`
//!
//! The wallet RPC client is injected as shared state; handlers never build
//! their own connections.

pub mod server;

pub use server::{router, serve};
