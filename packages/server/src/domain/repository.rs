//! Repository trait 定義
//!
//! ドメイン層が必要とする教室状態へのアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドはそれ自体でアトミックです。複数の呼び出しをまたぐ順序付けは
//! `SessionCoordinator` のイベント単位のロックが保証します。

use async_trait::async_trait;

use super::{Classroom, ConnectionHandle, Identity, RepositoryError, Role, Timestamp};

/// Classroom Repository trait
#[async_trait]
pub trait ClassroomRepository: Send + Sync {
    /// 教室のスナップショットを取得
    async fn get_classroom(&self) -> Classroom;

    /// 接続を登録（未認証）
    async fn register_connection(&self, handle: ConnectionHandle, connected_at: Timestamp);

    /// 接続を認証し、解決された役割を返す
    async fn authenticate(
        &self,
        handle: &ConnectionHandle,
        identity: Identity,
    ) -> Result<Role, RepositoryError>;

    /// 接続を削除し、紐づいていた Identity を返す
    async fn unregister_connection(&self, handle: &ConnectionHandle) -> Option<Identity>;

    /// 接続の役割を取得
    async fn role_of(&self, handle: &ConnectionHandle) -> Role;

    /// 接続に紐づく Identity を取得
    async fn identity_of(&self, handle: &ConnectionHandle) -> Option<Identity>;

    /// 設定された教師の Identity を取得
    async fn teacher_identity(&self) -> Identity;

    /// アクティブな教師ハンドルを取得
    async fn active_teacher(&self) -> Option<ConnectionHandle>;

    /// 接続中の全てのハンドルを取得
    async fn connected_handles(&self) -> Vec<ConnectionHandle>;

    /// 挙手を追加し、追加後の挙手数を返す
    async fn raise_hand(&self, identity: Identity) -> usize;

    /// 挙手を全て消去
    async fn clear_hands(&self);

    /// 現在の挙手数を取得
    async fn count_raised_hands(&self) -> usize;
}
