//! WebSocket message DTOs.
//!
//! One JSON object per text frame, discriminated by the `type` field.

use serde::{Deserialize, Serialize};

/// `user_id` as sent by clients: chat platforms hand out numeric ids, but any
/// string is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

/// Client -> server messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Auth {
        user_id: UserId,
    },
    #[serde(rename = "hand")]
    RaiseHand,
    ClearHand,
    Draw {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<bool>,
    },
    #[serde(rename = "clear")]
    ClearBoard,
}

/// Server -> client messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    HandUpdate {
        count: usize,
    },
    Draw {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<bool>,
    },
    #[serde(rename = "clear")]
    ClearBoard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_with_numeric_and_text_user_id() {
        // テスト項目: user_id は数値でも文字列でも受け付ける
        // given (前提条件):
        let numeric = r#"{"type":"auth","user_id":6968612778}"#;
        let textual = r#"{"type":"auth","user_id":"alice"}"#;

        // when (操作):
        let numeric: ClientMessage = serde_json::from_str(numeric).unwrap();
        let textual: ClientMessage = serde_json::from_str(textual).unwrap();

        // then (期待する結果):
        assert_eq!(
            numeric,
            ClientMessage::Auth {
                user_id: UserId::Number(6968612778)
            }
        );
        assert_eq!(
            textual,
            ClientMessage::Auth {
                user_id: UserId::Text("alice".to_string())
            }
        );
    }

    #[test]
    fn test_parse_messages_without_payload() {
        // テスト項目: ペイロードを持たないメッセージを type だけで判別できる
        // given (前提条件):
        let inputs = [
            (r#"{"type":"hand"}"#, ClientMessage::RaiseHand),
            (r#"{"type":"clear_hand"}"#, ClientMessage::ClearHand),
            (r#"{"type":"clear"}"#, ClientMessage::ClearBoard),
        ];

        for (input, expected) in inputs {
            // when (操作):
            let parsed: ClientMessage = serde_json::from_str(input).unwrap();

            // then (期待する結果):
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn test_parse_draw_with_integer_coordinates_and_no_start() {
        // テスト項目: 整数の座標と start の省略を受け付ける
        // given (前提条件):
        let input = r#"{"type":"draw","x":10,"y":20}"#;

        // when (操作):
        let parsed: ClientMessage = serde_json::from_str(input).unwrap();

        // then (期待する結果):
        assert_eq!(
            parsed,
            ClientMessage::Draw {
                x: 10.0,
                y: 20.0,
                start: None
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_type_and_missing_fields() {
        // テスト項目: 未知の type や必須フィールドの欠落はパースエラーになる
        // given (前提条件):
        let inputs = [
            r#"{"type":"chat","content":"hi"}"#,
            r#"{"type":"auth"}"#,
            r#"{"type":"draw","x":1}"#,
            r#"{"x":1,"y":2}"#,
            "not json",
        ];

        for input in inputs {
            // when (操作):
            let parsed = serde_json::from_str::<ClientMessage>(input);

            // then (期待する結果):
            assert!(parsed.is_err(), "expected error for {}", input);
        }
    }

    #[test]
    fn test_serialize_server_messages() {
        // テスト項目: サーバーからのメッセージが期待する JSON 形式になる
        // given (前提条件):
        let hand_update = ServerMessage::HandUpdate { count: 2 };
        let clear = ServerMessage::ClearBoard;
        let draw = ServerMessage::Draw {
            x: 1.5,
            y: 2.0,
            start: None,
        };

        // when (操作):
        let hand_update = serde_json::to_value(&hand_update).unwrap();
        let clear = serde_json::to_value(&clear).unwrap();
        let draw = serde_json::to_value(&draw).unwrap();

        // then (期待する結果):
        assert_eq!(
            hand_update,
            serde_json::json!({"type": "hand_update", "count": 2})
        );
        assert_eq!(clear, serde_json::json!({"type": "clear"}));
        assert_eq!(draw, serde_json::json!({"type": "draw", "x": 1.5, "y": 2.0}));
    }
}
