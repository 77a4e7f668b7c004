//! UseCase: 挙手の全消去
//!
//! 挙手の全消去は教室全体の状態のリセットなので、教師だけでなく
//! 全ての接続（送信した教師自身を含む）に挙手数 0 を通知する。

use std::sync::Arc;

use crate::domain::{ClassroomRepository, ConnectionHandle, MessagePusher, OutboundEvent, Role};

use super::error::EventError;

/// 挙手の全消去のユースケース
pub struct ClearHandsUseCase {
    repository: Arc<dyn ClassroomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ClearHandsUseCase {
    pub fn new(
        repository: Arc<dyn ClassroomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 挙手の全消去を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConnectionHandle>)` - 挙手数 0 を送信した接続
    /// * `Err(EventError)` - 教師以外からの全消去
    pub async fn execute(
        &self,
        handle: ConnectionHandle,
    ) -> Result<Vec<ConnectionHandle>, EventError> {
        let role = self.repository.role_of(&handle).await;
        EventError::require_role("clear_hand", Role::Teacher, role)?;

        self.repository.clear_hands().await;

        let targets = self.repository.connected_handles().await;
        let delivered = self
            .message_pusher
            .broadcast(targets, &OutboundEvent::HandUpdate { count: 0 })
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to broadcast hand reset: {}", e);
                vec![]
            });

        Ok(delivered)
    }
}
