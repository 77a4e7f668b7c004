//! Classroom エンティティ
//!
//! 1 つの教室の状態（接続レジストリと挙手の集合）をまとめて所有する。
//! プロセス全体のシングルトンではなく、Repository に注入して使う。

use crate::domain::{
    ConnectionHandle, Identity, RepositoryError, Role, Timestamp,
    entity::{ConnectionRegistry, HandRaiseSet},
};

#[derive(Debug, Clone)]
pub struct Classroom {
    pub registry: ConnectionRegistry,
    pub hands: HandRaiseSet,
    pub created_at: Timestamp,
}

impl Classroom {
    pub fn new(teacher_identity: Identity, created_at: Timestamp) -> Self {
        Self {
            registry: ConnectionRegistry::new(teacher_identity),
            hands: HandRaiseSet::new(),
            created_at,
        }
    }

    pub fn teacher_identity(&self) -> &Identity {
        self.registry.teacher_identity()
    }

    pub fn is_teacher_identity(&self, identity: &Identity) -> bool {
        identity == self.teacher_identity()
    }

    pub fn authenticate(
        &mut self,
        handle: &ConnectionHandle,
        identity: Identity,
    ) -> Result<Role, RepositoryError> {
        self.registry.authenticate(handle, identity)
    }

    /// 挙手を追加し、追加後の挙手数を返す
    ///
    /// 教師の Identity は挙手の集合に入らない。
    pub fn raise_hand(&mut self, identity: Identity) -> usize {
        if !self.is_teacher_identity(&identity) {
            self.hands.add(identity);
        }
        self.hands.count()
    }

    /// 接続を削除する
    ///
    /// 生徒だった場合はその Identity の挙手も取り下げる。
    pub fn disconnect(&mut self, handle: &ConnectionHandle) -> Option<Identity> {
        let identity = self.registry.unregister(handle)?;
        if !self.is_teacher_identity(&identity) {
            self.hands.remove(&identity);
        }
        Some(identity)
    }
}
