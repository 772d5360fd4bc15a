//! Domain factories for creating domain entities and value objects.

use chanoma_shared::time::{get_jst_timestamp, timestamp_to_jst_clock};

use super::{
    entity::ChatMessage,
    value_object::{MessageText, SessionId, UserName},
};

/// Display name used for server-originated notices (welcome, join/leave).
pub const SYSTEM_SENDER: &str = "Admin";

/// Factory for generating SessionId instances.
///
/// The transport assigns each accepted connection a fresh identifier; this
/// factory encapsulates the generation so the rest of the server treats the
/// identifier as opaque.
pub struct SessionIdFactory;

impl SessionIdFactory {
    /// Generate a new SessionId with a random UUID v4.
    pub fn generate() -> SessionId {
        SessionId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for building timestamped message envelopes.
///
/// Stamps the current JST wall clock (`HH:MM:SS`) at build time. The text
/// is taken as-is; content policy lives upstream where the wire payload is
/// validated into a [`MessageText`].
pub struct MessageFactory;

impl MessageFactory {
    /// Build an envelope for a user-authored message.
    pub fn from_user(name: &UserName, text: &MessageText) -> ChatMessage {
        Self::build(name.as_str().to_string(), text.as_str().to_string())
    }

    /// Build an envelope for a server notice, sent as [`SYSTEM_SENDER`].
    pub fn from_system(text: impl Into<String>) -> ChatMessage {
        Self::build(SYSTEM_SENDER.to_string(), text.into())
    }

    fn build(name: String, text: String) -> ChatMessage {
        let time = timestamp_to_jst_clock(get_jst_timestamp());
        ChatMessage::new(name, text, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_factory_generate() {
        // テスト項目: SessionIdFactory::generate() で UUID v4 形式のセッション ID を生成できる
        // when (操作):
        let session_id = SessionIdFactory::generate();

        // then (期待する結果): UUID v4 の標準長（ハイフン含む）
        assert_eq!(session_id.as_str().len(), 36);
    }

    #[test]
    fn test_session_id_factory_generate_uniqueness() {
        // テスト項目: SessionIdFactory::generate() は毎回異なる ID を生成する
        // when (操作):
        let session_id1 = SessionIdFactory::generate();
        let session_id2 = SessionIdFactory::generate();

        // then (期待する結果):
        assert_ne!(session_id1, session_id2);
    }

    #[test]
    fn test_message_factory_from_user() {
        // テスト項目: ユーザー発のメッセージエンベロープが作成される
        // given (前提条件):
        let name = UserName::new("alice".to_string()).unwrap();
        let text = MessageText::new("Hello!".to_string()).unwrap();

        // when (操作):
        let message = MessageFactory::from_user(&name, &text);

        // then (期待する結果): 送信者・本文がそのまま、時刻は HH:MM:SS 形式
        assert_eq!(message.name, "alice");
        assert_eq!(message.text, "Hello!");
        assert_eq!(message.time.len(), 8);
        assert!(message.time.chars().enumerate().all(|(i, c)| {
            if i == 2 || i == 5 {
                c == ':'
            } else {
                c.is_ascii_digit()
            }
        }));
    }

    #[test]
    fn test_message_factory_from_system() {
        // テスト項目: システム通知は Admin 名義で作成される
        // when (操作):
        let message = MessageFactory::from_system("Welcome to Chat App!");

        // then (期待する結果):
        assert_eq!(message.name, SYSTEM_SENDER);
        assert_eq!(message.text, "Welcome to Chat App!");
    }
}
