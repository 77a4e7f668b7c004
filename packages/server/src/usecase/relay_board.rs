//! UseCase: 板書の中継
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayBoardUseCase::draw() / clear_board() メソッド
//!
//! ### なぜこのテストが必要か
//! - 教師の板書が送信者以外の全接続に同じ内容で届くことを保証する
//! - 教師以外からの板書が誰にも送信されないことを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：教師の板書・全消去
//! - エッジケース：教師しか接続していない（送信先なし）
//! - 異常系：生徒、未認証の接続からの板書

use std::sync::Arc;

use crate::domain::{
    ClassroomRepository, ConnectionHandle, MessagePusher, OutboundEvent, Role, Stroke,
};

use super::error::EventError;

/// 板書中継のユースケース
pub struct RelayBoardUseCase {
    repository: Arc<dyn ClassroomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelayBoardUseCase {
    pub fn new(
        repository: Arc<dyn ClassroomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 板書を中継
    pub async fn draw(
        &self,
        handle: ConnectionHandle,
        stroke: Stroke,
    ) -> Result<Vec<ConnectionHandle>, EventError> {
        self.relay(handle, "draw", OutboundEvent::Draw(stroke)).await
    }

    /// 板書の全消去を中継
    pub async fn clear_board(
        &self,
        handle: ConnectionHandle,
    ) -> Result<Vec<ConnectionHandle>, EventError> {
        self.relay(handle, "clear", OutboundEvent::ClearBoard).await
    }

    async fn relay(
        &self,
        handle: ConnectionHandle,
        event_name: &'static str,
        event: OutboundEvent,
    ) -> Result<Vec<ConnectionHandle>, EventError> {
        let role = self.repository.role_of(&handle).await;
        EventError::require_role(event_name, Role::Teacher, role)?;

        let targets = self.get_broadcast_targets(&handle).await;
        let delivered = self
            .message_pusher
            .broadcast(targets, &event)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to relay '{}': {}", event_name, e);
                vec![]
            });

        Ok(delivered)
    }

    /// ブロードキャスト対象のハンドルを取得
    ///
    /// 送信者以外の全ての接続（呼び出し時点のスナップショット）
    async fn get_broadcast_targets(&self, exclude: &ConnectionHandle) -> Vec<ConnectionHandle> {
        self.repository
            .connected_handles()
            .await
            .into_iter()
            .filter(|handle| handle != exclude)
            .collect()
    }
}
