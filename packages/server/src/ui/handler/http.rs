//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{ClassroomSummaryDto, HealthDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Summary of the classroom (counts only)
pub async fn classroom_summary(State(state): State<Arc<AppState>>) -> Json<ClassroomSummaryDto> {
    let classroom = state.get_classroom_state_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(ClassroomSummaryDto::from(&classroom))
}
