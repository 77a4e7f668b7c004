//! ドメイン層のエラー型

use thiserror::Error;

/// Value Object の生成に失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("identity must not be empty")]
    IdentityEmpty,

    #[error("identity is too long ({length} chars, max {max})")]
    IdentityTooLong { length: usize, max: usize },

    #[error("stroke coordinates must be finite numbers")]
    StrokeNotFinite,
}

/// Repository の操作に失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("connection '{0}' is not registered")]
    ConnectionNotFound(String),
}

/// メッセージの送信に失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("connection '{0}' not found")]
    ConnectionNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),

    #[error("failed to encode message: {0}")]
    EncodeFailed(String),
}
