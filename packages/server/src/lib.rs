//! Room-scoped WebSocket chat relay.
//!
//! Clients connect over WebSocket, enter a named room, exchange messages
//! and typing signals, and receive presence updates (who is in the room,
//! which rooms exist). Rooms are derived from the membership registry —
//! they appear with their first user and vanish with their last.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::config::ServerConfig;
pub use ui::run;
