//! WebSocket event DTOs for the chat relay.
//!
//! Events are JSON objects tagged by a `type` field carrying the original
//! camelCase event names (`enterRoom`, `userList`, ...), so a frame is
//! dispatched by name on receipt.

use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;

/// Events received from a client session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Enter (or switch to) a named room
    EnterRoom { name: String, room: String },
    /// Send a chat message to the current room
    Message { name: String, text: String },
    /// Typing signal for the current room
    Activity { name: String },
}

/// Events sent to client sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// A chat envelope: user message or Admin notice
    Message {
        name: String,
        text: String,
        time: String,
    },
    /// Refreshed user list for one room
    UserList { users: Vec<String> },
    /// Refreshed global room list
    RoomList { rooms: Vec<String> },
    /// Relayed typing signal
    Activity { name: String },
}

impl From<ChatMessage> for ServerEvent {
    fn from(message: ChatMessage) -> Self {
        Self::Message {
            name: message.name,
            text: message.text,
            time: message.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_event_enter_room_deserialize() {
        // テスト項目: enterRoom イベントが type タグで判別される
        // given (前提条件):
        let json = r#"{"type":"enterRoom","name":"alice","room":"lobby"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        match event {
            ClientEvent::EnterRoom { name, room } => {
                assert_eq!(name, "alice");
                assert_eq!(room, "lobby");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_client_event_unknown_type_fails() {
        // テスト項目: 未知の type タグはデシリアライズエラーになる
        // given (前提条件):
        let json = r#"{"type":"shout","text":"hi"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_server_event_message_serialize() {
        // テスト項目: message イベントが camelCase の type タグ付きで直列化される
        // given (前提条件):
        let event = ServerEvent::Message {
            name: "Admin".to_string(),
            text: "Welcome to Chat App!".to_string(),
            time: "12:00:00".to_string(),
        };

        // when (操作):
        let json = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(json["type"], "message");
        assert_eq!(json["name"], "Admin");
        assert_eq!(json["text"], "Welcome to Chat App!");
        assert_eq!(json["time"], "12:00:00");
    }

    #[test]
    fn test_server_event_lists_serialize() {
        // テスト項目: userList / roomList イベントの形が期待通り
        // given (前提条件):
        let user_list = ServerEvent::UserList {
            users: vec!["alice".to_string(), "bob".to_string()],
        };
        let room_list = ServerEvent::RoomList {
            rooms: vec!["lobby".to_string()],
        };

        // when (操作):
        let user_json = serde_json::to_value(&user_list).unwrap();
        let room_json = serde_json::to_value(&room_list).unwrap();

        // then (期待する結果):
        assert_eq!(user_json["type"], "userList");
        assert_eq!(user_json["users"][1], "bob");
        assert_eq!(room_json["type"], "roomList");
        assert_eq!(room_json["rooms"][0], "lobby");
    }
}
