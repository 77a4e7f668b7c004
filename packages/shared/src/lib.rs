//! Utilities shared between the Kokuban server and client.

pub mod logger;
pub mod time;
