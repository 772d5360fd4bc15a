//! Server state and connection management.

use std::sync::Arc;

use crate::{domain::UserRegistry, ui::outbox::Outbox};

/// Shared application state, injected into every handler.
///
/// Owns the two halves of the relay: the membership registry (who is in
/// which room) and the outbox (how to reach each connected session).
pub struct AppState {
    /// Registry（データアクセス層の抽象化）
    pub registry: Arc<dyn UserRegistry>,
    /// Outbound channels for every connected session
    pub outbox: Outbox,
}
