//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectUseCase::execute() メソッド
//! - 切断処理（レコード削除、旧ルームへの通知対象選定）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：ルームに入室していたセッションの切断だけが
//!   通知を発生させる
//! - 一度も入室しなかったセッションの切断では何も送信されないことを保証
//! - 最後のメンバーの切断でルームが一覧から消えることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：入室済みセッションの切断と通知
//! - エッジケース：未入室セッションの切断（通知なし、Registry 無変化）
//! - エッジケース：最後のメンバーの切断

use std::sync::Arc;

use crate::domain::{SessionId, User, UserRegistry};

/// 切断処理の結果
#[derive(Debug, Clone)]
pub struct DisconnectOutcome {
    /// 削除されたユーザーレコード
    pub user: User,
    /// 退室通知の送信対象（旧ルームの残りメンバー）
    pub peers: Vec<SessionId>,
    /// 更新後の旧ルームのユーザー一覧
    pub users: Vec<String>,
    /// 更新後の全体のルーム一覧
    pub rooms: Vec<String>,
}

/// セッション切断のユースケース
pub struct DisconnectUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn UserRegistry>,
}

impl DisconnectUseCase {
    /// 新しい DisconnectUseCase を作成
    pub fn new(registry: Arc<dyn UserRegistry>) -> Self {
        Self { registry }
    }

    /// 切断を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 切断したセッションの ID
    ///
    /// # Returns
    ///
    /// * `Some(DisconnectOutcome)` - 通知対象と更新後リスト
    /// * `None` - セッションは一度もルームに入室していない（通知不要）
    pub async fn execute(&self, session_id: &SessionId) -> Option<DisconnectOutcome> {
        let user = self.registry.find_user(session_id).await?;

        self.registry.remove_user(session_id).await;

        let remaining = self.registry.users_in_room(&user.room).await;
        let peers = remaining
            .iter()
            .map(|member| member.session_id.clone())
            .collect();
        let users = remaining
            .into_iter()
            .map(|member| member.name.into_string())
            .collect();
        let rooms = self
            .registry
            .active_rooms()
            .await
            .into_iter()
            .map(|room| room.into_string())
            .collect();

        Some(DisconnectOutcome {
            user,
            peers,
            users,
            rooms,
        })
    }
}
