//! UseCase: 認証処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AuthenticateUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 教師が（再）接続したとき、現在の挙手数を教師にだけ送ることを保証する
//! - 教師の Identity で複数接続した場合、後から認証した接続が教師になることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：生徒の認証、教師の認証
//! - エッジケース：教師の再接続、教師の置き換え、未登録の接続

use std::sync::Arc;

use crate::domain::{
    ClassroomRepository, ConnectionHandle, Identity, MessagePusher, OutboundEvent, Role,
};

use super::error::EventError;

/// 認証のユースケース
pub struct AuthenticateUseCase {
    repository: Arc<dyn ClassroomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl AuthenticateUseCase {
    pub fn new(
        repository: Arc<dyn ClassroomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 認証を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConnectionHandle>)` - 挙手数を送信した接続（教師なら自身、生徒なら空）
    /// * `Err(EventError::UnknownConnection)` - 接続が登録されていない
    pub async fn execute(
        &self,
        handle: ConnectionHandle,
        identity: Identity,
    ) -> Result<Vec<ConnectionHandle>, EventError> {
        let role = self
            .repository
            .authenticate(&handle, identity)
            .await
            .map_err(|_| EventError::UnknownConnection(handle.to_string()))?;

        if role != Role::Teacher {
            return Ok(vec![]);
        }

        let count = self.repository.count_raised_hands().await;
        match self
            .message_pusher
            .push_to(&handle, &OutboundEvent::HandUpdate { count })
            .await
        {
            Ok(()) => Ok(vec![handle]),
            Err(e) => {
                tracing::warn!("Failed to send hand snapshot to teacher '{}': {}", handle, e);
                Ok(vec![])
            }
        }
    }
}
