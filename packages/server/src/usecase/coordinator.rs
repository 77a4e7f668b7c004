//! Session Coordinator
//!
//! トランスポート層から届く接続・切断・イベントを、対応するユースケースに振り分ける。
//!
//! ## 順序付け
//!
//! 全てのイベントは `dispatch_lock` を保持したまま最後まで処理される。
//! `on_event` は処理を別タスクで実行するため、呼び出し側の future が
//! 途中で破棄（abort）されても、状態の変更だけが残って送信が失われることはない。
//! 状態の変更とそれに伴う送信は、接続をまたいで 1 つの全順序に並ぶ
//! （例えば 2 人の同時挙手で、教師に届く挙手数が 1, 2 の順になる）。
//! 送信はチャンネルへの push のみでブロックしないため、ロック中に行ってよい。

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    ClassroomRepository, ConnectionHandle, Identity, InboundEvent, MessagePusher, PusherChannel,
    Timestamp,
};

use super::{
    AuthenticateUseCase, ClearHandsUseCase, ConnectParticipantUseCase,
    DisconnectParticipantUseCase, RaiseHandUseCase, RelayBoardUseCase, error::EventError,
};

pub struct SessionCoordinator {
    dispatch_lock: Mutex<()>,
    connect_participant_usecase: ConnectParticipantUseCase,
    disconnect_participant_usecase: DisconnectParticipantUseCase,
    authenticate_usecase: AuthenticateUseCase,
    raise_hand_usecase: RaiseHandUseCase,
    clear_hands_usecase: ClearHandsUseCase,
    relay_board_usecase: RelayBoardUseCase,
}

impl SessionCoordinator {
    pub fn new(
        repository: Arc<dyn ClassroomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            dispatch_lock: Mutex::new(()),
            connect_participant_usecase: ConnectParticipantUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            disconnect_participant_usecase: DisconnectParticipantUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            authenticate_usecase: AuthenticateUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            ),
            raise_hand_usecase: RaiseHandUseCase::new(repository.clone(), message_pusher.clone()),
            clear_hands_usecase: ClearHandsUseCase::new(repository.clone(), message_pusher.clone()),
            relay_board_usecase: RelayBoardUseCase::new(repository, message_pusher),
        }
    }

    /// 新しい接続を登録
    pub async fn on_connect(&self, handle: ConnectionHandle, sender: PusherChannel) -> Timestamp {
        let _guard = self.dispatch_lock.lock().await;
        self.connect_participant_usecase.execute(handle, sender).await
    }

    /// 切断された接続を削除
    pub async fn on_disconnect(&self, handle: ConnectionHandle) -> Option<Identity> {
        let _guard = self.dispatch_lock.lock().await;
        self.disconnect_participant_usecase.execute(handle).await
    }

    /// イベントを適用し、送信した接続を返す
    ///
    /// `Err` は送信者に何も返さずに破棄されたイベントを表す。
    /// 処理は別タスクで最後まで実行され、この future を破棄しても中断されない。
    pub async fn on_event(
        self: &Arc<Self>,
        handle: ConnectionHandle,
        event: InboundEvent,
    ) -> Result<Vec<ConnectionHandle>, EventError> {
        let coordinator = Arc::clone(self);
        let kind = event.kind();
        tokio::spawn(async move { coordinator.dispatch(handle, event).await })
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Dispatch of '{}' from '{}' failed: {}", kind, handle, e);
                Err(EventError::DispatchFailed(kind))
            })
    }

    async fn dispatch(
        &self,
        handle: ConnectionHandle,
        event: InboundEvent,
    ) -> Result<Vec<ConnectionHandle>, EventError> {
        let _guard = self.dispatch_lock.lock().await;
        match event {
            InboundEvent::Auth { identity } => {
                self.authenticate_usecase.execute(handle, identity).await
            }
            InboundEvent::RaiseHand => self.raise_hand_usecase.execute(handle).await,
            InboundEvent::ClearHand => self.clear_hands_usecase.execute(handle).await,
            InboundEvent::Draw(stroke) => self.relay_board_usecase.draw(handle, stroke).await,
            InboundEvent::ClearBoard => self.relay_board_usecase.clear_board(handle).await,
        }
    }
}
