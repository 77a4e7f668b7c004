//! Kokuban classroom broadcast relay server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kokuban-server -- --teacher-id 6968612778
//! cargo run --bin kokuban-server -- --host 0.0.0.0 --port 3000 --teacher-id 6968612778
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use kokuban_server::{
    domain::{Classroom, Identity, Timestamp},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryClassroomRepository,
    },
    ui::Server,
    usecase::{GetClassroomStateUseCase, SessionCoordinator},
};
use kokuban_shared::{logger::setup_logger, time::get_jst_timestamp};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "kokuban-server")]
#[command(about = "Classroom broadcast relay server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "8080")]
    port: u16,

    /// User id that identifies the teacher
    #[arg(short = 't', long, env = "TEACHER_ID")]
    teacher_id: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let teacher_identity = match Identity::new(args.teacher_id) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::error!("Invalid teacher id: {}", e);
            std::process::exit(1);
        }
    };

    // 1. Create Repository (in-memory classroom)
    let classroom = Arc::new(Mutex::new(Classroom::new(
        teacher_identity,
        Timestamp::new(get_jst_timestamp()),
    )));
    tracing::info!(
        "Classroom created for teacher '{}'",
        classroom.lock().await.teacher_identity()
    );
    let repository = Arc::new(InMemoryClassroomRepository::new(classroom));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 3. Create UseCases
    let coordinator = Arc::new(SessionCoordinator::new(repository.clone(), message_pusher));
    let get_classroom_state_usecase = Arc::new(GetClassroomStateUseCase::new(repository));

    // 4. Create and run the server
    let server = Server::new(coordinator, get_classroom_state_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
