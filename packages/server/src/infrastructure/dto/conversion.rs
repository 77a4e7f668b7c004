//! Conversion logic between DTOs and domain events.

use kokuban_shared::time::timestamp_to_jst_rfc3339;
use thiserror::Error;

use crate::domain::{Classroom, Identity, InboundEvent, OutboundEvent, Stroke, ValueObjectError};
use crate::infrastructure::dto::{
    http::{ClassroomSummaryDto, ParticipantSummaryDto},
    websocket as dto,
};

/// An inbound frame that could not be turned into a domain event
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid message: {0}")]
    Invalid(#[from] ValueObjectError),
}

/// Decode a text frame into an inbound event.
pub fn decode_inbound(text: &str) -> Result<InboundEvent, DecodeError> {
    let message: dto::ClientMessage = serde_json::from_str(text)?;
    Ok(InboundEvent::try_from(message)?)
}

/// Encode an outbound event into a text frame.
pub fn encode_outbound(event: &OutboundEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&dto::ServerMessage::from(event.clone()))
}

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<dto::UserId> for Identity {
    type Error = ValueObjectError;

    fn try_from(user_id: dto::UserId) -> Result<Self, Self::Error> {
        match user_id {
            dto::UserId::Number(n) => Ok(Identity::from(n)),
            dto::UserId::Text(s) => Identity::new(s),
        }
    }
}

impl TryFrom<dto::ClientMessage> for InboundEvent {
    type Error = ValueObjectError;

    fn try_from(message: dto::ClientMessage) -> Result<Self, Self::Error> {
        let event = match message {
            dto::ClientMessage::Auth { user_id } => InboundEvent::Auth {
                identity: user_id.try_into()?,
            },
            dto::ClientMessage::RaiseHand => InboundEvent::RaiseHand,
            dto::ClientMessage::ClearHand => InboundEvent::ClearHand,
            dto::ClientMessage::Draw { x, y, start } => {
                InboundEvent::Draw(Stroke::new(x, y, start)?)
            }
            dto::ClientMessage::ClearBoard => InboundEvent::ClearBoard,
        };
        Ok(event)
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<OutboundEvent> for dto::ServerMessage {
    fn from(event: OutboundEvent) -> Self {
        match event {
            OutboundEvent::HandUpdate { count } => Self::HandUpdate { count },
            OutboundEvent::Draw(stroke) => Self::Draw {
                x: stroke.x,
                y: stroke.y,
                start: stroke.start,
            },
            OutboundEvent::ClearBoard => Self::ClearBoard,
        }
    }
}

impl From<&Classroom> for ClassroomSummaryDto {
    fn from(classroom: &Classroom) -> Self {
        let mut connections: Vec<_> = classroom.registry.connections().collect();
        connections.sort_by_key(|connection| connection.connected_at);
        let participants = connections
            .into_iter()
            .map(|connection| ParticipantSummaryDto {
                role: classroom.registry.role_of(&connection.handle).to_string(),
                connected_at: timestamp_to_jst_rfc3339(connection.connected_at.value()),
            })
            .collect();

        Self {
            connections: classroom.registry.len(),
            authenticated: classroom
                .registry
                .connections()
                .filter(|connection| connection.is_authenticated())
                .count(),
            teacher_connected: classroom.registry.active_teacher().is_some(),
            raised_hands: classroom.hands.count(),
            created_at: timestamp_to_jst_rfc3339(classroom.created_at.value()),
            participants,
        }
    }
}
