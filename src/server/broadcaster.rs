//! Outbound delivery of server messages.
//!
//! The session manager only knows participants by id; whatever can reach a participant
//! implements [`Broadcaster`]. In the running server that is the [`ConnectionRegistry`],
//! which maps ids to the mailbox of each websocket actor.

use actix::Recipient;
use log::debug;
use std::collections::HashMap;

use crate::server::protocol::ServerWsMessage;
use crate::server::types::ParticipantId;

pub trait Broadcaster {
    /// Deliver `msg` to one participant. Unknown participants are ignored.
    fn send_to(&self, participant: ParticipantId, msg: ServerWsMessage);

    /// Deliver the same message to every listed participant.
    fn send_to_all(&self, participants: &[ParticipantId], msg: ServerWsMessage) {
        for participant in participants {
            self.send_to(*participant, msg.clone());
        }
    }
}

/// Live websocket connections, keyed by participant.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: HashMap<ParticipantId, Recipient<ServerWsMessage>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, participant: ParticipantId, recipient: Recipient<ServerWsMessage>) {
        self.connections.insert(participant, recipient);
    }

    pub fn unregister(&mut self, participant: &ParticipantId) -> bool {
        self.connections.remove(participant).is_some()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }
}

impl Broadcaster for ConnectionRegistry {
    fn send_to(&self, participant: ParticipantId, msg: ServerWsMessage) {
        match self.connections.get(&participant) {
            Some(recipient) => recipient.do_send(msg),
            None => debug!("[Broadcaster] Dropping message for unknown participant {}", participant),
        }
    }
}
