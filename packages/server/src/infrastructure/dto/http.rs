//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

/// Response of `GET /api/classroom`
///
/// Identities are not exposed, only counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomSummaryDto {
    /// Live connections, authenticated or not
    pub connections: usize,
    /// Connections that have sent `auth`
    pub authenticated: usize,
    pub teacher_connected: bool,
    pub raised_hands: usize,
    /// RFC 3339 (JST)
    pub created_at: String,
    /// Live connections, oldest first
    pub participants: Vec<ParticipantSummaryDto>,
}

/// One live connection in `GET /api/classroom`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSummaryDto {
    /// `teacher`, `student` or `unknown` (not yet authenticated)
    pub role: String,
    /// RFC 3339 (JST)
    pub connected_at: String,
}
