mod http;
mod websocket;

pub use http::{classroom_summary, health_check};
pub use websocket::websocket_handler;
