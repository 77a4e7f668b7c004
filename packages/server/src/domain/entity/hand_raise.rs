//! Hand-Raise Set

use std::collections::HashSet;

use crate::domain::Identity;

/// 挙手中の生徒の Identity の集合
///
/// 挙手は接続ではなく Identity 単位で管理する。順序に意味はない。
#[derive(Debug, Clone, Default)]
pub struct HandRaiseSet {
    identities: HashSet<Identity>,
}

impl HandRaiseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 挙手を追加（既に存在すれば何もしない）
    ///
    /// 新しく追加された場合に `true` を返す。
    pub fn add(&mut self, identity: Identity) -> bool {
        self.identities.insert(identity)
    }

    /// 挙手を 1 件取り下げる（存在しなければ何もしない）
    pub fn remove(&mut self, identity: &Identity) -> bool {
        self.identities.remove(identity)
    }

    pub fn clear(&mut self) {
        self.identities.clear();
    }

    pub fn count(&self) -> usize {
        self.identities.len()
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.identities.contains(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: &str) -> Identity {
        Identity::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_add_counts_distinct_identities() {
        // テスト項目: 異なる Identity の挙手数が正しく数えられる
        // given (前提条件):
        let mut hands = HandRaiseSet::new();

        // when (操作):
        hands.add(identity("alice"));
        hands.add(identity("bob"));
        hands.add(identity("charlie"));

        // then (期待する結果):
        assert_eq!(hands.count(), 3);
    }

    #[test]
    fn test_add_is_idempotent() {
        // テスト項目: 同じ Identity の挙手は 1 件として扱われる
        // given (前提条件):
        let mut hands = HandRaiseSet::new();
        assert!(hands.add(identity("alice")));

        // when (操作):
        let added_again = hands.add(identity("alice"));

        // then (期待する結果):
        assert!(!added_again);
        assert_eq!(hands.count(), 1);
    }

    #[test]
    fn test_remove_only_removes_given_identity() {
        // テスト項目: 取り下げは指定した Identity のみに作用する
        // given (前提条件):
        let mut hands = HandRaiseSet::new();
        hands.add(identity("alice"));
        hands.add(identity("bob"));

        // when (操作):
        let removed = hands.remove(&identity("alice"));

        // then (期待する結果):
        assert!(removed);
        assert_eq!(hands.count(), 1);
        assert!(!hands.contains(&identity("alice")));
        assert!(hands.contains(&identity("bob")));
    }

    #[test]
    fn test_remove_absent_identity_is_noop() {
        // テスト項目: 挙手していない Identity の取り下げは何もしない
        // given (前提条件):
        let mut hands = HandRaiseSet::new();
        hands.add(identity("alice"));

        // when (操作):
        let removed = hands.remove(&identity("bob"));

        // then (期待する結果):
        assert!(!removed);
        assert_eq!(hands.count(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        // テスト項目: 全消去は何度実行しても挙手数 0 になる
        // given (前提条件):
        let mut hands = HandRaiseSet::new();
        hands.add(identity("alice"));
        hands.add(identity("bob"));

        // when (操作):
        hands.clear();
        let after_first = hands.count();
        hands.clear();
        let after_second = hands.count();

        // then (期待する結果):
        assert_eq!(after_first, 0);
        assert_eq!(after_second, 0);
    }
}
