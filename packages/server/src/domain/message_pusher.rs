//! MessagePusher trait 定義
//!
//! 接続中のクライアントへのメッセージ送信を抽象化します。
//! 生きている接続の集合はこの trait の実装（トランスポート側）が所有し、
//! UseCase 層は `push_to` と `broadcast` だけを通してクライアントに触れます。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionHandle, MessagePushError, OutboundEvent};

/// 1 接続分の送信チャンネル（エンコード済みのテキストフレームを運ぶ）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
///
/// 送信は fire-and-forget。配送確認を待たず、再送もしない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信チャンネルを登録
    async fn register_client(&self, handle: ConnectionHandle, sender: PusherChannel);

    /// 接続の送信チャンネルを登録解除
    async fn unregister_client(&self, handle: &ConnectionHandle);

    /// 特定の接続にイベントを送信
    async fn push_to(
        &self,
        handle: &ConnectionHandle,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError>;

    /// 複数の接続にイベントを送信
    ///
    /// 一部の接続への送信失敗は許容し、実際に送信できた接続を返す。
    async fn broadcast(
        &self,
        targets: Vec<ConnectionHandle>,
        event: &OutboundEvent,
    ) -> Result<Vec<ConnectionHandle>, MessagePushError>;
}
