//! InMemory User Registry 実装
//!
//! ドメイン層が定義する UserRegistry trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! セッション ID をキーにすることで「1 セッションにつき高々 1 レコード」の
//! 不変条件が構造的に保証されます。ルームは保存されません：アクティブな
//! ルーム一覧は常にユーザーレコードの `room` 値から導出されます。

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RoomName, SessionId, User, UserRegistry};

/// インメモリ User Registry 実装
///
/// HashMap をインメモリ DB として使用する実装。
/// ドメイン層の UserRegistry trait を実装します（依存性の逆転）。
#[derive(Default)]
pub struct InMemoryUserRegistry {
    /// セッション ID → ユーザーレコード
    users: Arc<Mutex<HashMap<SessionId, User>>>,
}

impl InMemoryUserRegistry {
    /// 新しい InMemoryUserRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRegistry for InMemoryUserRegistry {
    async fn upsert_user(&self, user: User) -> User {
        let mut users = self.users.lock().await;
        users.insert(user.session_id.clone(), user.clone());
        user
    }

    async fn remove_user(&self, session_id: &SessionId) {
        let mut users = self.users.lock().await;
        users.remove(session_id);
    }

    async fn find_user(&self, session_id: &SessionId) -> Option<User> {
        let users = self.users.lock().await;
        users.get(session_id).cloned()
    }

    async fn users_in_room(&self, room: &RoomName) -> Vec<User> {
        let users = self.users.lock().await;
        let mut in_room: Vec<User> = users
            .values()
            .filter(|user| &user.room == room)
            .cloned()
            .collect();

        // Sort by display name for consistent ordering
        in_room.sort_by(|a, b| a.name.cmp(&b.name));

        in_room
    }

    async fn active_rooms(&self) -> Vec<RoomName> {
        let users = self.users.lock().await;
        let rooms: BTreeSet<RoomName> = users.values().map(|user| user.room.clone()).collect();
        rooms.into_iter().collect()
    }
}
