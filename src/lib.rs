//! xmr-gateway: a minimal HTTP-to-JSON-RPC bridge for a Monero wallet daemon.
//!
//! One inbound endpoint (`GET /`) relays a fixed `get_address` call to the
//! daemon and returns the raw response body as JSON. The daemon client is
//! built once at startup (with a `get_info` connectivity probe) and shared
//! read-only across all request handlers.

pub mod config;
pub mod gateway;
pub mod rpc;
pub mod utils;

#[cfg(test)]
mod tests;
