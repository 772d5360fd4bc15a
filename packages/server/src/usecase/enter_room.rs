//! UseCase: ルーム入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EnterRoomUseCase::execute() メソッド
//! - 入室処理（旧ルームからの退室、レコード置換、各種リスト構築）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：旧ルームへの退室通知の対象が更新前の
//!   メンバー一覧から計算されることを保証
//! - 同一セッションの再入室でレコードが重複しないことを確認
//! - 旧ルームの最後のユーザーが移動した場合、ルーム一覧から消えることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：初回入室（旧ルームなし）
//! - 正常系：別ルームへの移動（旧ルームあり）
//! - エッジケース：唯一のメンバーの移動で旧ルームが消える

use std::sync::Arc;

use crate::domain::{RoomName, SessionId, User, UserName, UserRegistry};

/// 入室に伴い退室した旧ルームの情報
#[derive(Debug, Clone)]
pub struct DepartedRoom {
    /// 退室した旧ルーム
    pub room: RoomName,
    /// 退室通知の送信対象（更新前のメンバー一覧から、移動者本人を除いたもの）
    pub peers: Vec<SessionId>,
    /// 更新後の旧ルームのユーザー一覧（移動者は含まれない）
    pub users: Vec<String>,
}

/// 入室処理の結果
#[derive(Debug, Clone)]
pub struct EnterRoomOutcome {
    /// 保存されたユーザーレコード
    pub user: User,
    /// 旧ルームの情報（初回入室の場合は None）
    pub departed: Option<DepartedRoom>,
    /// 入室通知の送信対象（新ルームのメンバーから本人を除いたもの）
    pub peers: Vec<SessionId>,
    /// 新ルームのユーザー一覧（本人を含む）
    pub users: Vec<String>,
    /// 全体のルーム一覧
    pub rooms: Vec<String>,
}

/// ルーム入室のユースケース
pub struct EnterRoomUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn UserRegistry>,
}

impl EnterRoomUseCase {
    /// 新しい EnterRoomUseCase を作成
    pub fn new(registry: Arc<dyn UserRegistry>) -> Self {
        Self { registry }
    }

    /// 入室を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 入室するセッションの ID
    /// * `name` - 表示名
    /// * `room` - 入室先のルーム
    ///
    /// # Returns
    ///
    /// 送信対象と各種リストを含む [`EnterRoomOutcome`]
    pub async fn execute(
        &self,
        session_id: SessionId,
        name: UserName,
        room: RoomName,
    ) -> EnterRoomOutcome {
        // 旧ルームの退室通知対象は、レコードを上書きする「前」のメンバー一覧から
        // 計算しなければならない。更新後のユーザー一覧の読み直しは upsert の後。
        let previous_room = self
            .registry
            .find_user(&session_id)
            .await
            .map(|user| user.room);

        let departed_peers = match &previous_room {
            Some(prev) => self.peers_in_room(prev, &session_id).await,
            None => Vec::new(),
        };

        let user = self
            .registry
            .upsert_user(User::new(session_id.clone(), name, room))
            .await;

        let departed = match previous_room {
            Some(prev) => {
                let users = self.user_names_in_room(&prev).await;
                Some(DepartedRoom {
                    room: prev,
                    peers: departed_peers,
                    users,
                })
            }
            None => None,
        };

        let peers = self.peers_in_room(&user.room, &session_id).await;
        let users = self.user_names_in_room(&user.room).await;
        let rooms = self
            .registry
            .active_rooms()
            .await
            .into_iter()
            .map(|room| room.into_string())
            .collect();

        EnterRoomOutcome {
            user,
            departed,
            peers,
            users,
            rooms,
        }
    }

    /// ルーム内のメンバーから指定セッションを除いたセッション ID 一覧
    async fn peers_in_room(&self, room: &RoomName, exclude: &SessionId) -> Vec<SessionId> {
        self.registry
            .users_in_room(room)
            .await
            .into_iter()
            .filter(|user| &user.session_id != exclude)
            .map(|user| user.session_id)
            .collect()
    }

    /// ルーム内の表示名一覧
    async fn user_names_in_room(&self, room: &RoomName) -> Vec<String> {
        self.registry
            .users_in_room(room)
            .await
            .into_iter()
            .map(|user| user.name.into_string())
            .collect()
    }
}
