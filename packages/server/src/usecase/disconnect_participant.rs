//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断した生徒の挙手だけが取り下げられることを保証する
//! - 切断では誰にも通知しない（教師の挙手数表示は次の挙手か全消去まで古いまま）
//!
//! ### どのような状況を想定しているか
//! - 正常系：挙手中の生徒の切断
//! - エッジケース：挙手していない生徒、教師、未認証の接続の切断

use std::sync::Arc;

use crate::domain::{ClassroomRepository, ConnectionHandle, Identity, MessagePusher};

/// 切断のユースケース
pub struct DisconnectParticipantUseCase {
    repository: Arc<dyn ClassroomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectParticipantUseCase {
    pub fn new(
        repository: Arc<dyn ClassroomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 切断を実行し、接続に紐づいていた Identity を返す
    pub async fn execute(&self, handle: ConnectionHandle) -> Option<Identity> {
        self.message_pusher.unregister_client(&handle).await;
        self.repository.unregister_connection(&handle).await
    }
}
