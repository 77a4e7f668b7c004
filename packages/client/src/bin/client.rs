//! Kokuban classroom client.
//!
//! Connects to the relay, authenticates with the given user id and sends
//! commands typed at the prompt. Automatically reconnects on disconnection
//! (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kokuban-client -- --user-id 6968612778
//! cargo run --bin kokuban-client -- -i alice -u ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;

use kokuban_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "kokuban-client")]
#[command(about = "Interactive classroom participant for the Kokuban relay", long_about = None)]
struct Args {
    /// User id sent in `auth` (the teacher's id makes this client the teacher)
    #[arg(short = 'i', long, env = "KOKUBAN_USER_ID")]
    user_id: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, env = "KOKUBAN_URL", default_value = "ws://127.0.0.1:8080/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if args.user_id.trim().is_empty() {
        tracing::error!("User id must not be empty");
        std::process::exit(1);
    }

    if let Err(e) = kokuban_client::run_client(args.url, args.user_id).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
