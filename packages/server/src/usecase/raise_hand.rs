//! UseCase: 挙手処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RaiseHandUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 挙手数が「挙手したまま消去・切断されていない Identity の数」と一致することを保証する
//! - 挙手数の通知がアクティブな教師にだけ届くことを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：生徒の挙手（教師あり・教師なし）
//! - 異常系：未認証の接続、教師、追い出された教師の接続からの挙手

use std::sync::Arc;

use crate::domain::{ClassroomRepository, ConnectionHandle, MessagePusher, OutboundEvent, Role};

use super::error::EventError;

/// 挙手のユースケース
pub struct RaiseHandUseCase {
    repository: Arc<dyn ClassroomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RaiseHandUseCase {
    pub fn new(
        repository: Arc<dyn ClassroomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 挙手を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConnectionHandle>)` - 挙手数を送信した接続（教師がいなければ空）
    /// * `Err(EventError)` - 生徒以外からの挙手
    pub async fn execute(
        &self,
        handle: ConnectionHandle,
    ) -> Result<Vec<ConnectionHandle>, EventError> {
        let role = self.repository.role_of(&handle).await;
        EventError::require_role("hand", Role::Student, role)?;

        let identity = self
            .repository
            .identity_of(&handle)
            .await
            .ok_or_else(|| EventError::UnknownConnection(handle.to_string()))?;
        if identity == self.repository.teacher_identity().await {
            return Err(EventError::TeacherCannotRaiseHand);
        }

        let count = self.repository.raise_hand(identity).await;

        // 教師がいなければ通知しない（キューにも積まない）
        let Some(teacher) = self.repository.active_teacher().await else {
            tracing::debug!("No active teacher, hand update ({}) not delivered", count);
            return Ok(vec![]);
        };

        match self
            .message_pusher
            .push_to(&teacher, &OutboundEvent::HandUpdate { count })
            .await
        {
            Ok(()) => Ok(vec![teacher]),
            Err(e) => {
                tracing::warn!("Failed to send hand update to teacher '{}': {}", teacher, e);
                Ok(vec![])
            }
        }
    }
}
