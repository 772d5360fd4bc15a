//! Core domain models for the chat relay.

use serde::{Deserialize, Serialize};

use super::value_object::{RoomName, SessionId, UserName};

/// A user currently present in a room.
///
/// Exactly one record exists per active session: created when the session
/// first enters a room, replaced (never duplicated) when the same session
/// changes rooms, deleted on disconnect. A session that has connected but
/// never entered a room has no User record at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Session that owns this record
    pub session_id: SessionId,
    /// Display name presented to the room
    pub name: UserName,
    /// Room the user currently occupies
    pub room: RoomName,
}

impl User {
    /// Create a new user record
    pub fn new(session_id: SessionId, name: UserName, room: RoomName) -> Self {
        Self {
            session_id,
            name,
            room,
        }
    }
}

/// A timestamped chat message envelope.
///
/// Ephemeral: constructed per send and immediately broadcast, never stored.
/// `time` is the wall clock at send, formatted `HH:MM:SS` (JST).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender's display name (or the system identity)
    pub name: String,
    /// Message body
    pub text: String,
    /// Send time, `HH:MM:SS`
    pub time: String,
}

impl ChatMessage {
    /// Create a new chat message envelope
    pub fn new(name: String, text: String, time: String) -> Self {
        Self { name, text, time }
    }
}
