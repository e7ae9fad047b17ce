//! Waiting list of participants looking for an opponent.
//!
//! Pairing takes the most recently queued participant (LIFO), not the longest waiting one.

use crate::error::GameError;
use crate::server::types::ParticipantId;

#[derive(Debug, Default)]
pub struct MatchmakingQueue {
    waiting: Vec<ParticipantId>,
}

impl MatchmakingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant. A participant already waiting is left where it is.
    pub fn enqueue(&mut self, participant: ParticipantId) -> Result<(), GameError> {
        if self.contains(&participant) {
            return Err(GameError::AlreadyQueued(participant));
        }
        self.waiting.push(participant);
        Ok(())
    }

    /// Take the most recently queued participant, if any.
    pub fn pair(&mut self) -> Option<ParticipantId> {
        self.waiting.pop()
    }

    /// Drop a participant from the queue. Returns false if it was not queued.
    pub fn remove(&mut self, participant: &ParticipantId) -> bool {
        match self.waiting.iter().position(|p| p == participant) {
            Some(index) => {
                self.waiting.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, participant: &ParticipantId) -> bool {
        self.waiting.contains(participant)
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }
}
