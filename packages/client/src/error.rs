//! Error types for the classroom client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server URL cannot be used for a WebSocket connection
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// The WebSocket handshake did not succeed
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// An established connection was closed or broke
    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    /// An outgoing message could not be serialized
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// Gave up after the maximum number of consecutive failed attempts
    #[error("Failed to reconnect after {0} attempts")]
    ReconnectFailed(u32),
}
