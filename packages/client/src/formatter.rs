//! Message formatting utilities for client display.

use kokuban_server::infrastructure::dto::websocket::ServerMessage;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a message received from the server
    pub fn format_server_message(message: &ServerMessage) -> String {
        match message {
            ServerMessage::HandUpdate { count } => Self::format_hand_update(*count),
            ServerMessage::Draw { x, y, start } => {
                Self::format_stroke(*x, *y, start.unwrap_or(false))
            }
            ServerMessage::ClearBoard => "\n# board cleared\n".to_string(),
        }
    }

    /// Format the raised-hand count
    pub fn format_hand_update(count: usize) -> String {
        match count {
            0 => "\n[hands] no hands raised\n".to_string(),
            1 => "\n[hands] 1 hand raised\n".to_string(),
            n => format!("\n[hands] {} hands raised\n", n),
        }
    }

    /// Format one point of a stroke
    ///
    /// A point with `start` begins a new line (move-to); the others extend it (line-to).
    pub fn format_stroke(x: f64, y: f64, start: bool) -> String {
        if start {
            format!("\n~ move to ({}, {})\n", x, y)
        } else {
            format!("\n~ line to ({}, {})\n", x, y)
        }
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }

    /// Format a binary message notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format the banner shown after connecting
    pub fn format_connected(user_id: &str) -> String {
        format!(
            "\nYou are '{}'. Type /help for the list of commands. Press Ctrl+C to exit.\n",
            user_id
        )
    }

    /// Format the list of commands
    pub fn format_help() -> String {
        let mut output = String::new();
        output.push_str("\nCommands:\n");
        output.push_str("  /hand              raise your hand\n");
        output.push_str("  /clear-hand        lower every hand (teacher only)\n");
        output.push_str("  /draw X Y [start]  draw a point, `start` begins a new line (teacher only)\n");
        output.push_str("  /clear             clear the board (teacher only)\n");
        output.push_str("  /help              show this list\n");
        output
    }
}
