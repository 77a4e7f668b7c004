//! Interactive CLI participant for the Kokuban classroom relay.

mod command;
mod domain;
pub mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use runner::run_client;
