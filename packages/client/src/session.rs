//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use kokuban_server::infrastructure::dto::websocket::{ClientMessage, ServerMessage};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Error as WsError, protocol::Message},
};

use crate::error::ClientError;

use super::{
    command::{self, Command},
    formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Run one connection to the relay
///
/// Sends `auth` right after connecting, then forwards typed commands and
/// prints incoming events until the input closes (`Ok`) or the connection
/// drops (`Err`).
pub async fn run_client_session(
    url: &str,
    user_id: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url).await.map_err(|e| match e {
        WsError::Url(e) => ClientError::InvalidUrl(e.to_string()),
        e => ClientError::ConnectionError(e.to_string()),
    })?;

    tracing::info!("Connected to classroom server!");
    let (mut write, mut read) = ws_stream.split();

    let auth = encode(&command::auth_message(user_id))?;
    write
        .send(Message::Text(auth.into()))
        .await
        .map_err(|e| ClientError::ConnectionLost(e.to_string()))?;

    print!("{}", MessageFormatter::format_connected(user_id));
    redisplay_prompt(user_id);

    loop {
        tokio::select! {
            line = input_rx.recv() => {
                let Some(line) = line else {
                    // input closed by the user
                    write.send(Message::Close(None)).await.ok();
                    return Ok(());
                };

                match command::parse(&line) {
                    Ok(Command::Send(message)) => {
                        let json = encode(&message)?;
                        if let Err(e) = write.send(Message::Text(json.into())).await {
                            tracing::warn!("Failed to send message: {}", e);
                            return Err(ClientError::ConnectionLost(e.to_string()));
                        }
                    }
                    Ok(Command::Help) => print!("{}", MessageFormatter::format_help()),
                    Err(e) => println!("{}", e),
                }
            }
            frame = read.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        let formatted = match serde_json::from_str::<ServerMessage>(&text) {
                            Ok(message) => MessageFormatter::format_server_message(&message),
                            Err(_) => MessageFormatter::format_raw_message(&text),
                        };
                        print!("{}", formatted);
                        redisplay_prompt(user_id);
                    }
                    Some(Ok(Message::Binary(data))) => {
                        print!("{}", MessageFormatter::format_binary_message(data.len()));
                        redisplay_prompt(user_id);
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Server closed the connection");
                        return Err(ClientError::ConnectionLost(
                            "closed by server".to_string(),
                        ));
                    }
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket read error: {}", e);
                        return Err(ClientError::ConnectionLost(e.to_string()));
                    }
                    Some(Ok(_)) => {}
                }
            }
        }
    }
}

fn encode(message: &ClientMessage) -> Result<String, ClientError> {
    Ok(serde_json::to_string(message)?)
}
