//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{GetClassroomStateUseCase, SessionCoordinator};

/// Shared application state
pub struct AppState {
    /// SessionCoordinator（WebSocket イベントの振り分け）
    pub coordinator: Arc<SessionCoordinator>,
    /// GetClassroomStateUseCase（教室の状態取得のユースケース）
    pub get_classroom_state_usecase: Arc<GetClassroomStateUseCase>,
}
