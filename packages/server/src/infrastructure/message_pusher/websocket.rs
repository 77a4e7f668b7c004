//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 生きている接続の集合（接続ごとの `UnboundedSender`）を所有する
//! - ドメインイベントを JSON にエンコードして送信する（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。
//! チャンネルへの送信はブロックしないため、送信は fire-and-forget になります。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionHandle, MessagePushError, MessagePusher, OutboundEvent, PusherChannel},
    infrastructure::dto::conversion::encode_outbound,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.push_to(&handle, &OutboundEvent::HandUpdate { count: 1 }).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの WebSocket sender
    clients: Arc<Mutex<HashMap<ConnectionHandle, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionHandle, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

fn encode(event: &OutboundEvent) -> Result<String, MessagePushError> {
    encode_outbound(event).map_err(|e| MessagePushError::EncodeFailed(e.to_string()))
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, handle: ConnectionHandle, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(handle, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", handle);
    }

    async fn unregister_client(&self, handle: &ConnectionHandle) {
        let mut clients = self.clients.lock().await;
        clients.remove(handle);
        tracing::debug!("Connection '{}' unregistered from MessagePusher", handle);
    }

    async fn push_to(
        &self,
        handle: &ConnectionHandle,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError> {
        let content = encode(event)?;
        let clients = self.clients.lock().await;

        let sender = clients
            .get(handle)
            .ok_or_else(|| MessagePushError::ConnectionNotFound(handle.to_string()))?;
        sender
            .send(content)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed message to connection '{}'", handle);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionHandle>,
        event: &OutboundEvent,
    ) -> Result<Vec<ConnectionHandle>, MessagePushError> {
        let content = encode(event)?;
        let clients = self.clients.lock().await;

        let mut delivered = Vec::with_capacity(targets.len());
        for target in targets {
            let Some(sender) = clients.get(&target) else {
                // closed between snapshot and send
                tracing::warn!("Connection '{}' not found during broadcast, skipping", target);
                continue;
            };
            // ブロードキャストでは一部の送信失敗を許容
            match sender.send(content.clone()) {
                Ok(()) => delivered.push(target),
                Err(e) => {
                    tracing::warn!("Failed to push message to connection '{}': {}", target, e)
                }
            }
        }
        tracing::debug!("Broadcasted message to {} connection(s)", delivered.len());

        Ok(delivered)
    }
}
