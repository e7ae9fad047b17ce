//! In-memory registry of running game sessions.

use std::collections::HashMap;

use crate::error::GameError;
use crate::game::board::Board;
use crate::game::types::PlayerSlot;
use crate::server::types::{ParticipantId, SessionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Finished,
}

/// Participants by seat. Seats never change during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats {
    pub player1: ParticipantId,
    pub player2: ParticipantId,
}

impl Seats {
    pub fn participant(&self, seat: PlayerSlot) -> ParticipantId {
        match seat {
            PlayerSlot::Player1 => self.player1,
            PlayerSlot::Player2 => self.player2,
        }
    }

    pub fn seat_of(&self, participant: &ParticipantId) -> Option<PlayerSlot> {
        if &self.player1 == participant {
            Some(PlayerSlot::Player1)
        } else if &self.player2 == participant {
            Some(PlayerSlot::Player2)
        } else {
            None
        }
    }

    pub fn both(&self) -> [ParticipantId; 2] {
        [self.player1, self.player2]
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: SessionId,
    pub board: Board,
    pub seats: Seats,
    pub current_player: PlayerSlot,
    pub status: SessionStatus,
}

impl GameSession {
    /// Fresh game: starting board, player 1 to move.
    pub fn new(seats: Seats) -> Self {
        Self {
            id: SessionId::for_pair(seats.player1, seats.player2),
            board: Board::new(),
            seats,
            current_player: PlayerSlot::Player1,
            status: SessionStatus::Active,
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, GameSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session. Ids must be unique; a clash leaves the store unchanged.
    pub fn insert(&mut self, session: GameSession) -> Result<(), GameError> {
        if self.sessions.contains_key(&session.id) {
            return Err(GameError::SessionIdCollision(session.id));
        }
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    pub fn get(&self, id: &SessionId) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut GameSession> {
        self.sessions.get_mut(id)
    }

    pub fn remove(&mut self, id: &SessionId) -> Option<GameSession> {
        self.sessions.remove(id)
    }

    /// The session a participant is seated in. A participant is in at most one.
    pub fn find_by_participant(&self, participant: &ParticipantId) -> Option<&GameSession> {
        self.sessions
            .values()
            .find(|session| session.seats.seat_of(participant).is_some())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
