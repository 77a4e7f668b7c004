//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionHandle, infrastructure::dto::conversion::decode_inbound,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// The task ends when the channel is closed (the connection was unregistered)
/// or when the socket refuses a write.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let handle = ConnectionHandle::generate();

    // Create a channel for this connection to receive outbound events
    let (tx, rx) = mpsc::unbounded_channel();
    state.coordinator.on_connect(handle, tx).await;
    tracing::info!("Connection '{}' opened", handle);

    let (sender, mut receiver) = socket.split();
    let state_clone = state.clone();

    // Spawn a task to receive events from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", handle, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => dispatch_text(&state_clone, handle, text.as_str()).await,
                Message::Binary(_) => {
                    tracing::debug!("Ignoring binary frame from '{}'", handle);
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", handle);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to push outbound events to this connection
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    match state.coordinator.on_disconnect(handle).await {
        Some(identity) => tracing::info!("Connection '{}' ({}) closed", handle, identity),
        None => tracing::info!("Connection '{}' closed before authenticating", handle),
    }
}

/// Decode one text frame and hand it to the coordinator
///
/// Malformed frames and rejected events are dropped without a reply.
async fn dispatch_text(state: &AppState, handle: ConnectionHandle, text: &str) {
    let event = match decode_inbound(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Dropping malformed message from '{}': {}", handle, e);
            return;
        }
    };

    let kind = event.kind();
    match state.coordinator.on_event(handle, event).await {
        Ok(delivered) => tracing::debug!(
            "Event '{}' from '{}' delivered to {} connection(s)",
            kind,
            handle,
            delivered.len()
        ),
        Err(e) => tracing::debug!("Dropping event '{}' from '{}': {}", kind, handle, e),
    }
}
