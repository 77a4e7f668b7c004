//! Domain layer: classroom state, events, and the interfaces the use cases depend on.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{Classroom, Connection, ConnectionRegistry, HandRaiseSet};
pub use error::{MessagePushError, RepositoryError, ValueObjectError};
pub use event::{InboundEvent, OutboundEvent};
pub use message_pusher::{MessagePusher, PusherChannel};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use repository::ClassroomRepository;
pub use value_object::{ConnectionHandle, Identity, Role, Stroke, Timestamp};
