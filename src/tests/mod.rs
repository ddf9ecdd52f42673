//! Test module for the gateway.
//!
//! - Integration tests (mock wallet daemon, end-to-end handler behavior)
