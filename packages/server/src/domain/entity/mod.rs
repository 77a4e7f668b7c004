//! Entities

mod classroom;
mod hand_raise;
mod registry;

pub use classroom::Classroom;
pub use hand_raise::HandRaiseSet;
pub use registry::{Connection, ConnectionRegistry};
