//! Parsing of the lines typed at the prompt.

use kokuban_server::infrastructure::dto::websocket::{ClientMessage, UserId};
use thiserror::Error;

const DRAW_USAGE: &str = "/draw X Y [start]";

/// A line typed by the user
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Send a message to the server
    Send(ClientMessage),
    /// Show the list of commands
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type /help for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line into a command.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match name {
        "/help" => Ok(Command::Help),
        "/hand" => no_args(&args, "/hand", ClientMessage::RaiseHand),
        "/clear-hand" => no_args(&args, "/clear-hand", ClientMessage::ClearHand),
        "/clear" => no_args(&args, "/clear", ClientMessage::ClearBoard),
        "/draw" => parse_draw(&args),
        _ => Err(CommandError::Unknown(name.to_string())),
    }
}

fn no_args(
    args: &[&str],
    usage: &'static str,
    message: ClientMessage,
) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(Command::Send(message))
    } else {
        Err(CommandError::Usage(usage))
    }
}

fn parse_draw(args: &[&str]) -> Result<Command, CommandError> {
    let (x, y, start) = match args {
        [x, y] => (*x, *y, None),
        [x, y, "start"] => (*x, *y, Some(true)),
        _ => return Err(CommandError::Usage(DRAW_USAGE)),
    };
    let coordinate = |value: &str| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(CommandError::Usage(DRAW_USAGE))
    };

    Ok(Command::Send(ClientMessage::Draw {
        x: coordinate(x)?,
        y: coordinate(y)?,
        start,
    }))
}

/// The `auth` message for a user id given on the command line
///
/// Ids written in canonical integer form are sent as JSON numbers, the way
/// chat platforms hand them out. Anything else (`007`, `alice`) stays a string.
pub fn auth_message(user_id: &str) -> ClientMessage {
    let user_id = match user_id.parse::<i64>() {
        Ok(number) if number.to_string() == user_id => UserId::Number(number),
        _ => UserId::Text(user_id.to_string()),
    };
    ClientMessage::Auth { user_id }
}
