//! HTTP API response DTOs for the chat relay.

use serde::{Deserialize, Serialize};

/// Room summary for the presence snapshot endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub room: String,
    pub users: Vec<String>,
}
