//! UseCase: 接続処理
//!
//! 接続をレジストリ（未認証）と MessagePusher の両方に登録する。

use std::sync::Arc;

use kokuban_shared::time::get_jst_timestamp;

use crate::domain::{ClassroomRepository, ConnectionHandle, MessagePusher, PusherChannel, Timestamp};

/// 接続のユースケース
pub struct ConnectParticipantUseCase {
    repository: Arc<dyn ClassroomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectParticipantUseCase {
    pub fn new(
        repository: Arc<dyn ClassroomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 接続を実行し、接続時刻を返す
    pub async fn execute(&self, handle: ConnectionHandle, sender: PusherChannel) -> Timestamp {
        let connected_at = Timestamp::new(get_jst_timestamp());

        self.repository.register_connection(handle, connected_at).await;
        self.message_pusher.register_client(handle, sender).await;

        connected_at
    }
}
