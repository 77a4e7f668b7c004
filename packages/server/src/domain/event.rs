//! 教室内でやり取りされるイベント
//!
//! ワイヤ形式（JSON）との変換は `infrastructure::dto` が担当する。

use super::value_object::{Identity, Stroke};

/// クライアントから届くイベント
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// 名乗り（接続後いつでも、何度でも）
    Auth { identity: Identity },
    /// 挙手（生徒のみ）
    RaiseHand,
    /// 挙手の全消去（教師のみ）
    ClearHand,
    /// 板書（教師のみ）
    Draw(Stroke),
    /// 板書の全消去（教師のみ）
    ClearBoard,
}

impl InboundEvent {
    /// ログ用のイベント名
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Auth { .. } => "auth",
            InboundEvent::RaiseHand => "hand",
            InboundEvent::ClearHand => "clear_hand",
            InboundEvent::Draw(_) => "draw",
            InboundEvent::ClearBoard => "clear",
        }
    }
}

/// クライアントへ送るイベント
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    /// 現在の挙手数
    HandUpdate { count: usize },
    /// 板書の中継
    Draw(Stroke),
    /// 板書の全消去の中継
    ClearBoard,
}
