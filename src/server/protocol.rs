//! JSON messages exchanged over the game websocket.
//!
//! Frames are `{"action": ..., "data": ...}` objects in both directions.

use actix::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::game::board::Board;
use crate::game::types::{PlayerSlot, Winner};
use crate::server::types::{ParticipantId, SessionId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientWsMessage {
    Join,
    Move {
        session_id: SessionId,
        player: PlayerSlot,
        pocket_index: usize,
    },
    Leave {
        session_id: SessionId,
    },
    Ping,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LastMove {
    pub player: PlayerSlot,
    pub pocket: usize,
    pub mover: ParticipantId,
    pub description: String,
}

/// Authoritative snapshot of a session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    pub session_id: SessionId,
    pub board: Board,
    pub current_player: PlayerSlot,
    /// Recipient's own seat; only set on the first snapshot after matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<PlayerSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_move: Option<LastMove>,
}

// Server -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerWsMessage {
    Waiting {
        message: String,
    },
    Matched {
        session_id: SessionId,
        seat: PlayerSlot,
    },
    GameState(GameStateSnapshot),
    GameOver {
        session_id: SessionId,
        winner: Winner,
        message: String,
        board: Board,
    },
    OpponentDisconnected {
        session_id: SessionId,
        message: String,
    },
    Error {
        code: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<Value>,
    },
}

impl ServerWsMessage {
    pub fn waiting() -> Self {
        Self::Waiting {
            message: "Waiting for an opponent...".to_string(),
        }
    }

    pub fn opponent_disconnected(session_id: SessionId) -> Self {
        Self::OpponentDisconnected {
            session_id,
            message: "Your opponent disconnected.".to_string(),
        }
    }

    pub fn error(code: &str, message: &str, context: Option<Value>) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_client_frames() {
        let join: ClientWsMessage = serde_json::from_str(r#"{"action":"join"}"#).unwrap();
        assert_eq!(join, ClientWsMessage::Join);

        let mv: ClientWsMessage = serde_json::from_str(
            r#"{"action":"move","data":{"sessionId":"a#b","player":"player2","pocketIndex":9}}"#,
        )
        .unwrap();
        assert_eq!(
            mv,
            ClientWsMessage::Move {
                session_id: SessionId::from("a#b"),
                player: PlayerSlot::Player2,
                pocket_index: 9,
            }
        );

        let leave: ClientWsMessage =
            serde_json::from_str(r#"{"action":"leave","data":{"sessionId":"a#b"}}"#).unwrap();
        assert_eq!(leave, ClientWsMessage::Leave { session_id: SessionId::from("a#b") });
    }

    #[test]
    fn rejects_unknown_actions() {
        assert!(serde_json::from_str::<ClientWsMessage>(r#"{"action":"cheat"}"#).is_err());
        assert!(serde_json::from_str::<ClientWsMessage>(r#"{"action":"move","data":{}}"#).is_err());
    }

    #[test]
    fn game_state_frame_shape() {
        let msg = ServerWsMessage::GameState(GameStateSnapshot {
            session_id: SessionId::from("a#b"),
            board: Board::new(),
            current_player: PlayerSlot::Player1,
            seat: Some(PlayerSlot::Player2),
            last_move: None,
        });
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "action": "gameState",
                "data": {
                    "sessionId": "a#b",
                    "board": [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0],
                    "currentPlayer": "player1",
                    "seat": "player2"
                }
            })
        );
    }

    #[test]
    fn game_over_frame_shape() {
        let msg = ServerWsMessage::GameOver {
            session_id: SessionId::from("a#b"),
            winner: Winner::Tie,
            message: "Tie game at 24 each".to_string(),
            board: Board::from_slots([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["action"], "gameOver");
        assert_eq!(value["data"]["winner"], "tie");
        assert_eq!(value["data"]["sessionId"], "a#b");
    }
}
