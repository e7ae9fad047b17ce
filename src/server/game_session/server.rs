//! Game server actor.
//!
//! Owns the session manager and the registry of live connections. The actor mailbox
//! processes one request at a time, so joins, moves, leaves and disconnects never
//! interleave and a waiting player can never be paired twice.

use actix::prelude::*;
use log::{info, warn};
use serde_json::{json, Value};

use crate::error::GameError;
use crate::server::broadcaster::{Broadcaster, ConnectionRegistry};
use crate::server::game_session::manager::SessionManager;
use crate::server::game_session::messages::{
    Connect, Disconnect, GetStats, ProcessClientMessage, ServerStats,
};
use crate::server::protocol::{ClientWsMessage, ServerWsMessage};
use crate::server::types::ParticipantId;

pub struct GameServer {
    manager: SessionManager,
    connections: ConnectionRegistry,
}

impl GameServer {
    pub fn new(manager: SessionManager) -> Self {
        Self {
            manager,
            connections: ConnectionRegistry::new(),
        }
    }

    /// Tell the sender why its request was refused. Nothing else is affected.
    fn reject(&self, participant: ParticipantId, err: &GameError, context: Option<Value>) {
        warn!("[GameServer] Rejected request from {}: {}", participant, err);
        self.connections.send_to(
            participant,
            ServerWsMessage::error(err.code(), &err.to_string(), context),
        );
    }
}

impl Actor for GameServer {
    type Context = Context<Self>;
}

impl Handler<Connect> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
        info!("[GameServer] New client connected: {}", msg.participant);
        self.connections.register(msg.participant, msg.addr);
    }
}

impl Handler<Disconnect> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        info!("[GameServer] Client disconnected: {}", msg.participant);
        self.manager.disconnect(msg.participant, &self.connections);
        self.connections.unregister(&msg.participant);
    }
}

impl Handler<ProcessClientMessage> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, _: &mut Context<Self>) -> Self::Result {
        let participant = msg.participant;
        let (result, context) = match msg.msg {
            ClientWsMessage::Join => (self.manager.join(participant, &self.connections).map(|_| ()), None),
            ClientWsMessage::Move {
                session_id,
                player,
                pocket_index,
            } => (
                self.manager
                    .make_move(participant, &session_id, player, pocket_index, &self.connections)
                    .map(|_| ()),
                Some(json!({ "sessionId": session_id, "pocketIndex": pocket_index })),
            ),
            ClientWsMessage::Leave { session_id } => (
                self.manager.leave(participant, &session_id),
                Some(json!({ "sessionId": session_id })),
            ),
            ClientWsMessage::Ping => (Ok(()), None),
        };

        if let Err(err) = result {
            self.reject(participant, &err, context);
        }
    }
}

impl Handler<GetStats> for GameServer {
    type Result = MessageResult<GetStats>;

    fn handle(&mut self, _: GetStats, _: &mut Context<Self>) -> Self::Result {
        MessageResult(ServerStats {
            connections: self.connections.len(),
            waiting: self.manager.queue().len(),
            sessions: self.manager.store().len(),
        })
    }
}
