//! UseCase: メッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - メッセージ中継処理（送信元ルームの解決、配信対象の選定、エンベロープ構築）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：メッセージは送信者のルームのメンバー全員
//!   （送信者本人を含む）にだけ配信される
//! - ルーム未入室のセッションからのメッセージが黙って破棄されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム内へのメッセージ配信
//! - エッジケース：ルーム未入室セッションからの送信（配信なし）
//! - エッジケース：別ルームのメンバーには届かない

use std::sync::Arc;

use crate::domain::{
    ChatMessage, MessageFactory, MessageText, RoomName, SessionId, UserName, UserRegistry,
};

/// 中継されるメッセージと配信対象
#[derive(Debug, Clone)]
pub struct RelayedMessage {
    /// 送信者のルーム
    pub room: RoomName,
    /// 配信対象（ルームのメンバー全員。送信者本人を含む）
    pub targets: Vec<SessionId>,
    /// タイムスタンプ付きのメッセージエンベロープ
    pub message: ChatMessage,
}

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn UserRegistry>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(registry: Arc<dyn UserRegistry>) -> Self {
        Self { registry }
    }

    /// メッセージ中継を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 送信元セッションの ID
    /// * `name` - ペイロードで名乗った表示名
    /// * `text` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Some(RelayedMessage)` - 配信対象とエンベロープ
    /// * `None` - 送信元がルーム未入室（黙って破棄）
    pub async fn execute(
        &self,
        session_id: &SessionId,
        name: UserName,
        text: MessageText,
    ) -> Option<RelayedMessage> {
        let Some(user) = self.registry.find_user(session_id).await else {
            tracing::debug!("Dropping message from roomless session '{}'", session_id);
            return None;
        };

        let targets = self
            .registry
            .users_in_room(&user.room)
            .await
            .into_iter()
            .map(|member| member.session_id)
            .collect();

        let message = MessageFactory::from_user(&name, &text);

        Some(RelayedMessage {
            room: user.room,
            targets,
            message,
        })
    }
}
