use actix::prelude::*;

use crate::server::protocol::{ClientWsMessage, ServerWsMessage};
use crate::server::types::ParticipantId;

/// A websocket connection opened; `addr` receives everything addressed to `participant`.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub participant: ParticipantId,
    pub addr: Recipient<ServerWsMessage>,
}

/// The websocket connection of `participant` is gone.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub participant: ParticipantId,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub participant: ParticipantId,
    pub msg: ClientWsMessage,
}

/// Counters for the health of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerStats {
    pub connections: usize,
    pub waiting: usize,
    pub sessions: usize,
}

#[derive(Message)]
#[rtype(result = "ServerStats")]
pub struct GetStats;
