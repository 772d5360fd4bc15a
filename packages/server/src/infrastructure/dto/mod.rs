//! Data transfer objects for the wire boundaries.

pub mod http;
pub mod websocket;
