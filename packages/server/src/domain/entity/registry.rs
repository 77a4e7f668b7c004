//! Connection Registry
//!
//! 接続ハンドルから（任意の）認証済み Identity への対応と、
//! アクティブな教師ハンドルを管理する。

use std::collections::HashMap;

use crate::domain::{ConnectionHandle, Identity, RepositoryError, Role, Timestamp};

/// 1 接続分のエントリ
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub handle: ConnectionHandle,
    /// `auth` を受け取るまでは `None`
    pub identity: Option<Identity>,
    pub connected_at: Timestamp,
}

impl Connection {
    pub fn new(handle: ConnectionHandle, connected_at: Timestamp) -> Self {
        Self {
            handle,
            identity: None,
            connected_at,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Connection Registry
///
/// ## 不変条件
///
/// - 生きている接続はちょうど 1 つのエントリを持ち、切断時に削除される
/// - `active_teacher` は登録済みのハンドルのみを指す
#[derive(Debug, Clone)]
pub struct ConnectionRegistry {
    teacher_identity: Identity,
    entries: HashMap<ConnectionHandle, Connection>,
    active_teacher: Option<ConnectionHandle>,
}

impl ConnectionRegistry {
    pub fn new(teacher_identity: Identity) -> Self {
        Self {
            teacher_identity,
            entries: HashMap::new(),
            active_teacher: None,
        }
    }

    pub fn teacher_identity(&self) -> &Identity {
        &self.teacher_identity
    }

    /// 未認証のエントリを作成
    ///
    /// ハンドルの一意性はトランスポート層が保証する。
    pub fn register(&mut self, handle: ConnectionHandle, connected_at: Timestamp) {
        self.entries.insert(handle, Connection::new(handle, connected_at));
    }

    /// エントリに Identity を紐づけ、解決された役割を返す
    ///
    /// 教師の Identity で認証した接続は、それまでの教師ハンドルを通知なしで置き換える
    /// （後勝ち）。教師ハンドルが教師以外の Identity で認証し直した場合は、
    /// 教師不在になる。
    pub fn authenticate(
        &mut self,
        handle: &ConnectionHandle,
        identity: Identity,
    ) -> Result<Role, RepositoryError> {
        let entry = self
            .entries
            .get_mut(handle)
            .ok_or_else(|| RepositoryError::ConnectionNotFound(handle.to_string()))?;

        let is_teacher = identity == self.teacher_identity;
        entry.identity = Some(identity);

        if is_teacher {
            if let Some(previous) = self.active_teacher.replace(*handle)
                && previous != *handle
            {
                tracing::debug!(
                    "Teacher handle '{}' displaced by '{}'",
                    previous,
                    handle
                );
            }
            Ok(Role::Teacher)
        } else {
            if self.active_teacher == Some(*handle) {
                self.active_teacher = None;
            }
            Ok(Role::Student)
        }
    }

    /// 接続の役割を導出
    pub fn role_of(&self, handle: &ConnectionHandle) -> Role {
        if self.active_teacher == Some(*handle) {
            return Role::Teacher;
        }
        match self.entries.get(handle) {
            Some(entry) if entry.is_authenticated() => Role::Student,
            _ => Role::Unknown,
        }
    }

    pub fn identity_of(&self, handle: &ConnectionHandle) -> Option<&Identity> {
        self.entries
            .get(handle)
            .and_then(|entry| entry.identity.as_ref())
    }

    /// エントリを削除し、紐づいていた Identity を返す
    ///
    /// 教師ハンドルだった場合は教師不在になる（代わりの教師は選ばない）。
    pub fn unregister(&mut self, handle: &ConnectionHandle) -> Option<Identity> {
        if self.active_teacher == Some(*handle) {
            self.active_teacher = None;
        }
        self.entries.remove(handle).and_then(|entry| entry.identity)
    }

    pub fn active_teacher(&self) -> Option<ConnectionHandle> {
        self.active_teacher
    }

    /// 接続中の全てのハンドル（呼び出し時点のスナップショット）
    pub fn handles(&self) -> Vec<ConnectionHandle> {
        self.entries.keys().copied().collect()
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.entries.values()
    }

    pub fn contains(&self, handle: &ConnectionHandle) -> bool {
        self.entries.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher() -> Identity {
        Identity::new("teacher".to_string()).unwrap()
    }

    fn student(name: &str) -> Identity {
        Identity::new(name.to_string()).unwrap()
    }

    fn registry_with(handles: &[ConnectionHandle]) -> ConnectionRegistry {
        let mut registry = ConnectionRegistry::new(teacher());
        for handle in handles {
            registry.register(*handle, Timestamp::new(1000));
        }
        registry
    }

    #[test]
    fn test_registered_connection_is_unknown_until_authenticated() {
        // テスト項目: 登録直後の接続は Unknown として扱われる
        // given (前提条件):
        let handle = ConnectionHandle::generate();
        let registry = registry_with(&[handle]);

        // when (操作):
        let role = registry.role_of(&handle);

        // then (期待する結果):
        assert_eq!(role, Role::Unknown);
        assert!(registry.contains(&handle));
        assert_eq!(registry.identity_of(&handle), None);
    }

    #[test]
    fn test_unregistered_handle_is_unknown() {
        // テスト項目: 登録されていないハンドルは Unknown として扱われる
        // given (前提条件):
        let registry = registry_with(&[]);

        // when (操作):
        let role = registry.role_of(&ConnectionHandle::generate());

        // then (期待する結果):
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn test_authenticate_resolves_student_and_teacher() {
        // テスト項目: 教師の Identity なら Teacher、それ以外なら Student に解決される
        // given (前提条件):
        let teacher_handle = ConnectionHandle::generate();
        let student_handle = ConnectionHandle::generate();
        let mut registry = registry_with(&[teacher_handle, student_handle]);

        // when (操作):
        let teacher_role = registry.authenticate(&teacher_handle, teacher()).unwrap();
        let student_role = registry
            .authenticate(&student_handle, student("alice"))
            .unwrap();

        // then (期待する結果):
        assert_eq!(teacher_role, Role::Teacher);
        assert_eq!(student_role, Role::Student);
        assert_eq!(registry.active_teacher(), Some(teacher_handle));
        assert_eq!(registry.role_of(&teacher_handle), Role::Teacher);
        assert_eq!(registry.role_of(&student_handle), Role::Student);
    }

    #[test]
    fn test_authenticate_unregistered_handle_fails() {
        // テスト項目: 登録されていないハンドルの認証はエラーになる
        // given (前提条件):
        let mut registry = registry_with(&[]);
        let handle = ConnectionHandle::generate();

        // when (操作):
        let result = registry.authenticate(&handle, student("alice"));

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RepositoryError::ConnectionNotFound(handle.to_string()))
        );
        assert_eq!(registry.active_teacher(), None);
    }

    #[test]
    fn test_second_teacher_authentication_displaces_first() {
        // テスト項目: 教師の Identity で 2 接続が認証した場合、後から認証した方が教師になる
        // given (前提条件):
        let first = ConnectionHandle::generate();
        let second = ConnectionHandle::generate();
        let mut registry = registry_with(&[first, second]);
        registry.authenticate(&first, teacher()).unwrap();

        // when (操作):
        registry.authenticate(&second, teacher()).unwrap();

        // then (期待する結果):
        assert_eq!(registry.active_teacher(), Some(second));
        assert_eq!(registry.role_of(&second), Role::Teacher);
        // 追い出された接続は Student として扱われる
        assert_eq!(registry.role_of(&first), Role::Student);
    }

    #[test]
    fn test_teacher_reauthenticating_as_student_vacates_teacher_seat() {
        // テスト項目: 教師ハンドルが別の Identity で認証し直すと教師不在になる
        // given (前提条件):
        let handle = ConnectionHandle::generate();
        let mut registry = registry_with(&[handle]);
        registry.authenticate(&handle, teacher()).unwrap();

        // when (操作):
        let role = registry.authenticate(&handle, student("alice")).unwrap();

        // then (期待する結果):
        assert_eq!(role, Role::Student);
        assert_eq!(registry.active_teacher(), None);
    }

    #[test]
    fn test_unregister_returns_identity_and_clears_teacher() {
        // テスト項目: 教師の切断で Identity が返され、教師不在になる
        // given (前提条件):
        let handle = ConnectionHandle::generate();
        let mut registry = registry_with(&[handle]);
        registry.authenticate(&handle, teacher()).unwrap();

        // when (操作):
        let identity = registry.unregister(&handle);

        // then (期待する結果):
        assert_eq!(identity, Some(teacher()));
        assert_eq!(registry.active_teacher(), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_displaced_teacher_keeps_active_teacher() {
        // テスト項目: 追い出された教師接続の切断はアクティブな教師に影響しない
        // given (前提条件):
        let first = ConnectionHandle::generate();
        let second = ConnectionHandle::generate();
        let mut registry = registry_with(&[first, second]);
        registry.authenticate(&first, teacher()).unwrap();
        registry.authenticate(&second, teacher()).unwrap();

        // when (操作):
        registry.unregister(&first);

        // then (期待する結果):
        assert_eq!(registry.active_teacher(), Some(second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_unauthenticated_returns_none() {
        // テスト項目: 未認証の接続を削除すると None が返される
        // given (前提条件):
        let handle = ConnectionHandle::generate();
        let mut registry = registry_with(&[handle]);

        // when (操作):
        let identity = registry.unregister(&handle);

        // then (期待する結果):
        assert_eq!(identity, None);
        assert!(!registry.contains(&handle));
    }

    #[test]
    fn test_handles_returns_all_live_connections() {
        // テスト項目: 接続中の全てのハンドルが取得できる
        // given (前提条件):
        let handles = [
            ConnectionHandle::generate(),
            ConnectionHandle::generate(),
            ConnectionHandle::generate(),
        ];
        let registry = registry_with(&handles);

        // when (操作):
        let result = registry.handles();

        // then (期待する結果):
        assert_eq!(result.len(), 3);
        for handle in &handles {
            assert!(result.contains(handle));
        }
    }
}
