//! UseCase: タイピングシグナル中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SignalActivityUseCase::execute() メソッド
//! - タイピングシグナルの配信対象選定
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：シグナルは送信者「以外」のルームメンバーにだけ
//!   届く（このシステムで唯一の非対称ブロードキャスト）
//! - ルーム未入室セッションからのシグナルが黙って破棄されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：3 人のルームで送信者以外の 2 人に届く
//! - エッジケース：ルーム未入室セッションからのシグナル（配信なし）

use std::sync::Arc;

use crate::domain::{RoomName, SessionId, UserRegistry};

/// 中継されるタイピングシグナルの配信対象
#[derive(Debug, Clone)]
pub struct ActivitySignal {
    /// 送信者のルーム
    pub room: RoomName,
    /// 配信対象（ルームのメンバーから送信者本人を除いたもの）
    pub targets: Vec<SessionId>,
}

/// タイピングシグナル中継のユースケース
pub struct SignalActivityUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn UserRegistry>,
}

impl SignalActivityUseCase {
    /// 新しい SignalActivityUseCase を作成
    pub fn new(registry: Arc<dyn UserRegistry>) -> Self {
        Self { registry }
    }

    /// シグナル中継を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 送信元セッションの ID
    ///
    /// # Returns
    ///
    /// * `Some(ActivitySignal)` - 配信対象
    /// * `None` - 送信元がルーム未入室（黙って破棄）
    pub async fn execute(&self, session_id: &SessionId) -> Option<ActivitySignal> {
        let Some(user) = self.registry.find_user(session_id).await else {
            tracing::debug!("Dropping activity from roomless session '{}'", session_id);
            return None;
        };

        let targets = self
            .registry
            .users_in_room(&user.room)
            .await
            .into_iter()
            .filter(|member| &member.session_id != session_id)
            .map(|member| member.session_id)
            .collect();

        Some(ActivitySignal {
            room: user.room,
            targets,
        })
    }
}
