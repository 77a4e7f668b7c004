//! Client execution logic with reconnection support.

use std::time::Duration;

use super::{
    domain::{NextStep, ReconnectPolicy},
    error::ClientError,
    session::run_client_session,
    ui::spawn_line_reader,
};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Run the classroom client with reconnection logic
///
/// Every (re)connection authenticates again with the same user id.
pub async fn run_client(url: String, user_id: String) -> Result<(), ClientError> {
    let mut input_rx = spawn_line_reader(&user_id);
    let mut policy = ReconnectPolicy::new(MAX_RECONNECT_ATTEMPTS);

    loop {
        tracing::info!("Connecting to {} as '{}'", url, user_id);

        let outcome = run_client_session(&url, &user_id, &mut input_rx).await;
        match policy.next_step(&outcome) {
            NextStep::Exit => {
                tracing::info!("Client session ended normally");
                return Ok(());
            }
            NextStep::Abort => return outcome,
            NextStep::GiveUp => {
                return Err(ClientError::ReconnectFailed(policy.max_attempts()));
            }
            NextStep::Reconnect { attempt } => {
                if let Err(e) = &outcome {
                    tracing::warn!("{}", e);
                }
                tracing::info!(
                    "Reconnecting in {} seconds... (attempt {}/{})",
                    RECONNECT_INTERVAL_SECS,
                    attempt,
                    policy.max_attempts()
                );
                tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
            }
        }
    }
}
