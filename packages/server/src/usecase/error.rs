//! UseCase 層のエラー型
//!
//! どのエラーも送信者には返さない（fail-silent）。UI 層でログに残すだけ。

use thiserror::Error;

use crate::domain::Role;

/// イベントが適用されずに破棄された理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// 送信者の役割がイベントに必要な役割と一致しない
    #[error("'{event}' requires the {required} role, sender is {actual}")]
    UnauthorizedRole {
        event: &'static str,
        required: Role,
        actual: Role,
    },

    /// 教師の Identity は挙手できない（追い出された教師の接続など）
    #[error("the teacher identity cannot raise a hand")]
    TeacherCannotRaiseHand,

    /// 送信者の接続が登録されていない
    #[error("connection '{0}' is not registered")]
    UnknownConnection(String),

    /// イベントの処理タスクが異常終了した
    #[error("dispatch of '{0}' did not complete")]
    DispatchFailed(&'static str),
}

impl EventError {
    /// 送信者の役割を検査する
    pub(crate) fn require_role(
        event: &'static str,
        required: Role,
        actual: Role,
    ) -> Result<(), Self> {
        if actual == required {
            Ok(())
        } else {
            Err(Self::UnauthorizedRole {
                event,
                required,
                actual,
            })
        }
    }
}
