//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::RoomSummaryDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Presence snapshot: every active room with its member names.
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.registry.active_rooms().await;

    let mut summaries = Vec::with_capacity(rooms.len());
    for room in rooms {
        let users = state
            .registry
            .users_in_room(&room)
            .await
            .into_iter()
            .map(|user| user.name.into_string())
            .collect();
        summaries.push(RoomSummaryDto {
            room: room.into_string(),
            users,
        });
    }

    Json(summaries)
}
