//! Room membership registry contract.
//!
//! The registry is the single source of truth mapping sessions to
//! `(display name, room)`. All mutation of the User collection goes through
//! this trait; every other component only reads through its queries.
//! The UseCase layer depends on this trait, not on a concrete store
//! (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::User,
    value_object::{RoomName, SessionId},
};

/// Room membership registry.
///
/// Invariants upheld by implementations:
/// - at most one [`User`] record per session at any time;
/// - the set of active rooms is exactly the set of distinct `room` values
///   among current users (a room with zero members ceases to exist).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Insert a user record, replacing any existing record for the same
    /// session. Records for other sessions are untouched. Returns the
    /// stored record.
    async fn upsert_user(&self, user: User) -> User;

    /// Delete the record for the session if present; no-op otherwise.
    async fn remove_user(&self, session_id: &SessionId);

    /// Look up the user record for a session.
    async fn find_user(&self, session_id: &SessionId) -> Option<User>;

    /// All users currently in the room, sorted by display name.
    async fn users_in_room(&self, room: &RoomName) -> Vec<User>;

    /// Distinct room names among current users, sorted.
    async fn active_rooms(&self) -> Vec<RoomName>;
}
