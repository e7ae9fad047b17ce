//! Error types for move validation and session requests.
//!
//! Every variant is scoped to the request that produced it: the session manager rejects the
//! request, leaves all state untouched, and the connection layer turns the error into an
//! `error` frame for the sender only.

use thiserror::Error;

use crate::game::types::PlayerSlot;
use crate::server::types::{ParticipantId, SessionId};

/// Why the board engine refused a move.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("pocket {0} does not exist")]
    OutOfRange(usize),
    #[error("slot {0} is a store and cannot be played")]
    IsStore(usize),
    #[error("pocket {pocket} is not on {player}'s side")]
    WrongSide { pocket: usize, player: PlayerSlot },
    #[error("pocket {0} is empty")]
    EmptyPocket(usize),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no active session with id {0}")]
    UnknownSession(SessionId),
    #[error("it is {expected}'s turn")]
    NotYourTurn { expected: PlayerSlot },
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
    #[error("participant {0} is already waiting for an opponent")]
    AlreadyQueued(ParticipantId),
    #[error("participant {0} is already playing in session {1}")]
    AlreadyInSession(ParticipantId, SessionId),
    #[error("session id {0} is already in use")]
    SessionIdCollision(SessionId),
}

impl GameError {
    /// Machine-readable code sent to clients in error frames.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::UnknownSession(_) => "UNKNOWN_SESSION",
            GameError::NotYourTurn { .. } => "NOT_YOUR_TURN",
            GameError::InvalidMove(_) => "INVALID_MOVE",
            GameError::AlreadyQueued(_) => "ALREADY_QUEUED",
            GameError::AlreadyInSession(..) => "ALREADY_IN_SESSION",
            GameError::SessionIdCollision(_) => "SESSION_ID_COLLISION",
        }
    }
}
