//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::{GetClassroomStateUseCase, SessionCoordinator};

use super::{
    handler::{classroom_summary, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Classroom broadcast relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(coordinator, get_classroom_state_usecase);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// SessionCoordinator（WebSocket イベントの振り分け）
    coordinator: Arc<SessionCoordinator>,
    /// GetClassroomStateUseCase（教室の状態取得のユースケース）
    get_classroom_state_usecase: Arc<GetClassroomStateUseCase>,
}

impl Server {
    pub fn new(
        coordinator: Arc<SessionCoordinator>,
        get_classroom_state_usecase: Arc<GetClassroomStateUseCase>,
    ) -> Self {
        Self {
            coordinator,
            get_classroom_state_usecase,
        }
    }

    /// Build the router without binding it
    ///
    /// Used by `run` and by tests that serve on their own listener.
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            coordinator: self.coordinator,
            get_classroom_state_usecase: self.get_classroom_state_usecase,
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/classroom", get(classroom_summary))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the relay server until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Kokuban server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
