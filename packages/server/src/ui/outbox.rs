//! Outbound half of the connection transport.
//!
//! Maps each connected session to its WebSocket sender channel and exposes
//! the three delivery shapes the relay needs: unicast, targeted broadcast,
//! global broadcast. Room membership is never stored here — target lists
//! always come from the registry via use-case outcomes, so rooms stay a
//! derived view.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, mpsc};

use crate::{domain::SessionId, infrastructure::dto::websocket::ServerEvent};

/// Session-addressed event sender. Cloneable — stored in AppState.
#[derive(Clone, Default)]
pub struct Outbox {
    sessions: Arc<Mutex<HashMap<SessionId, mpsc::UnboundedSender<String>>>>,
}

impl Outbox {
    /// Create an empty Outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session's sender channel on connect.
    pub async fn register(&self, session_id: SessionId, sender: mpsc::UnboundedSender<String>) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session_id, sender);
    }

    /// Drop a session's sender channel on disconnect.
    pub async fn unregister(&self, session_id: &SessionId) {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(session_id);
    }

    /// Send an event to one session.
    pub async fn send_to(&self, session_id: &SessionId, event: &ServerEvent) {
        let payload = serde_json::to_string(event).unwrap();
        let sessions = self.sessions.lock().await;
        if let Some(sender) = sessions.get(session_id)
            && sender.send(payload).is_err()
        {
            tracing::warn!("Failed to send event to session '{}'", session_id);
        }
    }

    /// Send an event to each of the listed sessions.
    pub async fn send_to_many(&self, targets: &[SessionId], event: &ServerEvent) {
        let payload = serde_json::to_string(event).unwrap();
        let sessions = self.sessions.lock().await;
        for session_id in targets {
            if let Some(sender) = sessions.get(session_id)
                && sender.send(payload.clone()).is_err()
            {
                tracing::warn!("Failed to send event to session '{}'", session_id);
            }
        }
    }

    /// Send an event to every connected session.
    pub async fn send_all(&self, event: &ServerEvent) {
        let payload = serde_json::to_string(event).unwrap();
        let sessions = self.sessions.lock().await;
        for (session_id, sender) in sessions.iter() {
            if sender.send(payload.clone()).is_err() {
                tracing::warn!("Failed to send event to session '{}'", session_id);
            }
        }
    }
}
