//! Shared utilities for the Chanoma chat relay.
//!
//! Cross-cutting concerns used by the server binary and integration tests:
//! logger bootstrap and JST time helpers.

pub mod logger;
pub mod time;
