use serde::{Deserialize, Serialize};

use crate::config::game::{PLAYER1_STORE, PLAYER2_STORE, POCKETS_PER_SIDE};

/// A participant's seat in a session. Fixed when the session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::Player1 => PlayerSlot::Player2,
            PlayerSlot::Player2 => PlayerSlot::Player1,
        }
    }

    /// Index of this seat's store.
    pub fn store(self) -> usize {
        match self {
            PlayerSlot::Player1 => PLAYER1_STORE,
            PlayerSlot::Player2 => PLAYER2_STORE,
        }
    }

    /// Board indices of the six pockets on this seat's side.
    pub fn pockets(self) -> std::ops::Range<usize> {
        match self {
            PlayerSlot::Player1 => 0..POCKETS_PER_SIDE,
            PlayerSlot::Player2 => PLAYER1_STORE + 1..PLAYER2_STORE,
        }
    }

    pub fn owns_pocket(self, index: usize) -> bool {
        self.pockets().contains(&index)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerSlot::Player1 => "player1",
            PlayerSlot::Player2 => "player2",
        }
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player1,
    Player2,
    Tie,
}
