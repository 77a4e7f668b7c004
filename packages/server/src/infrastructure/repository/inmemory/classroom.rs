//! InMemory Classroom Repository 実装
//!
//! ドメイン層が定義する ClassroomRepository trait の具体的な実装。
//! Classroom ドメインモデルを `Mutex` で保護してそのまま保持します。
//! プロセスの再起動で状態は失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Classroom, ClassroomRepository, ConnectionHandle, Identity, RepositoryError, Role, Timestamp,
};

/// インメモリ Classroom Repository 実装
pub struct InMemoryClassroomRepository {
    classroom: Arc<Mutex<Classroom>>,
}

impl InMemoryClassroomRepository {
    /// 新しい InMemoryClassroomRepository を作成
    pub fn new(classroom: Arc<Mutex<Classroom>>) -> Self {
        Self { classroom }
    }
}

#[async_trait]
impl ClassroomRepository for InMemoryClassroomRepository {
    async fn get_classroom(&self) -> Classroom {
        let classroom = self.classroom.lock().await;
        classroom.clone()
    }

    async fn register_connection(&self, handle: ConnectionHandle, connected_at: Timestamp) {
        let mut classroom = self.classroom.lock().await;
        classroom.registry.register(handle, connected_at);
    }

    async fn authenticate(
        &self,
        handle: &ConnectionHandle,
        identity: Identity,
    ) -> Result<Role, RepositoryError> {
        let mut classroom = self.classroom.lock().await;
        classroom.authenticate(handle, identity)
    }

    async fn unregister_connection(&self, handle: &ConnectionHandle) -> Option<Identity> {
        let mut classroom = self.classroom.lock().await;
        classroom.disconnect(handle)
    }

    async fn role_of(&self, handle: &ConnectionHandle) -> Role {
        let classroom = self.classroom.lock().await;
        classroom.registry.role_of(handle)
    }

    async fn identity_of(&self, handle: &ConnectionHandle) -> Option<Identity> {
        let classroom = self.classroom.lock().await;
        classroom.registry.identity_of(handle).cloned()
    }

    async fn teacher_identity(&self) -> Identity {
        let classroom = self.classroom.lock().await;
        classroom.teacher_identity().clone()
    }

    async fn active_teacher(&self) -> Option<ConnectionHandle> {
        let classroom = self.classroom.lock().await;
        classroom.registry.active_teacher()
    }

    async fn connected_handles(&self) -> Vec<ConnectionHandle> {
        let classroom = self.classroom.lock().await;
        classroom.registry.handles()
    }

    async fn raise_hand(&self, identity: Identity) -> usize {
        let mut classroom = self.classroom.lock().await;
        classroom.raise_hand(identity)
    }

    async fn clear_hands(&self) {
        let mut classroom = self.classroom.lock().await;
        classroom.hands.clear();
    }

    async fn count_raised_hands(&self) -> usize {
        let classroom = self.classroom.lock().await;
        classroom.hands.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokuban_shared::time::get_jst_timestamp;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryClassroomRepository が Classroom ドメインモデルへ正しく委譲すること
    // - 接続の登録・認証・削除と挙手の集合の整合性
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - 切断時に挙手が取り下げられる（レジストリと挙手の集合の同期）ことを保証する
    //
    // 【どのようなシナリオをテストするか】
    // 1. 接続の登録と認証
    // 2. 挙手と全消去
    // 3. 挙手中の生徒の切断
    // 4. 教師の切断
    // ========================================

    fn identity(name: &str) -> Identity {
        Identity::new(name.to_string()).unwrap()
    }

    fn create_test_repository() -> InMemoryClassroomRepository {
        let classroom = Arc::new(Mutex::new(Classroom::new(
            identity("teacher"),
            Timestamp::new(get_jst_timestamp()),
        )));
        InMemoryClassroomRepository::new(classroom)
    }

    #[tokio::test]
    async fn test_register_and_authenticate_connection() {
        // テスト項目: 登録した接続を認証すると役割が解決される
        // given (前提条件):
        let repo = create_test_repository();
        let handle = ConnectionHandle::generate();
        repo.register_connection(handle, Timestamp::new(get_jst_timestamp()))
            .await;

        // when (操作):
        let role = repo.authenticate(&handle, identity("alice")).await;

        // then (期待する結果):
        assert_eq!(role, Ok(Role::Student));
        assert_eq!(repo.role_of(&handle).await, Role::Student);
        assert_eq!(repo.identity_of(&handle).await, Some(identity("alice")));
        assert_eq!(repo.connected_handles().await, vec![handle]);
    }

    #[tokio::test]
    async fn test_raise_and_clear_hands() {
        // テスト項目: 挙手数が集計され、全消去で 0 に戻る
        // given (前提条件):
        let repo = create_test_repository();
        repo.raise_hand(identity("alice")).await;
        let count = repo.raise_hand(identity("bob")).await;
        assert_eq!(count, 2);

        // when (操作):
        repo.clear_hands().await;

        // then (期待する結果):
        assert_eq!(repo.count_raised_hands().await, 0);
    }

    #[tokio::test]
    async fn test_unregister_student_lowers_hand() {
        // テスト項目: 挙手中の生徒を削除すると挙手も取り下げられる
        // given (前提条件):
        let repo = create_test_repository();
        let handle = ConnectionHandle::generate();
        repo.register_connection(handle, Timestamp::new(0)).await;
        repo.authenticate(&handle, identity("alice")).await.unwrap();
        repo.raise_hand(identity("alice")).await;

        // when (操作):
        let removed = repo.unregister_connection(&handle).await;

        // then (期待する結果):
        assert_eq!(removed, Some(identity("alice")));
        assert_eq!(repo.count_raised_hands().await, 0);
        assert!(repo.connected_handles().await.is_empty());
    }

    #[tokio::test]
    async fn test_unregister_teacher_vacates_seat() {
        // テスト項目: 教師を削除すると教師不在になる
        // given (前提条件):
        let repo = create_test_repository();
        let handle = ConnectionHandle::generate();
        repo.register_connection(handle, Timestamp::new(0)).await;
        repo.authenticate(&handle, identity("teacher")).await.unwrap();
        assert_eq!(repo.active_teacher().await, Some(handle));

        // when (操作):
        repo.unregister_connection(&handle).await;

        // then (期待する結果):
        assert_eq!(repo.active_teacher().await, None);
        assert_eq!(repo.teacher_identity().await, identity("teacher"));
    }
}
