/// WebSocket session handler for game clients.
///
/// This actor manages a single client's connection: it registers with the game server,
/// relays parsed client messages (join, move, leave) and serializes server messages back
/// to the client. When the connection ends the game server is told, which cleans up the
/// queue or the client's running game.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{error, info};
use std::time::{Duration, Instant};

use crate::config::connection::{CLIENT_TIMEOUT_SECS, HEARTBEAT_INTERVAL_SECS};
use crate::server::anti_spam::AntiSpamState;
use crate::server::game_session::messages::{Connect, Disconnect, ProcessClientMessage};
use crate::server::game_session::server::GameServer;
use crate::server::protocol::{ClientWsMessage, ServerWsMessage};
use crate::server::types::ParticipantId;
use crate::server::ws_actor_utils::WsActorUtils;

/// One websocket connection.
pub struct ClientSession {
    pub participant: ParticipantId,
    pub server_addr: Addr<GameServer>,
    last_heartbeat: Instant,
    anti_spam: AntiSpamState,
}

impl ClientSession {
    pub fn new(participant: ParticipantId, server_addr: Addr<GameServer>) -> Self {
        Self {
            participant,
            server_addr,
            last_heartbeat: Instant::now(),
            anti_spam: AntiSpamState::new(),
        }
    }

    /// Ping the client periodically and drop it once it stops answering.
    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(Duration::from_secs(HEARTBEAT_INTERVAL_SECS), |act, ctx| {
            if act.last_heartbeat.elapsed() > Duration::from_secs(CLIENT_TIMEOUT_SECS) {
                info!("[Session] Client {} timed out", act.participant);
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }
}

impl WsActorUtils for ClientSession {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }

    fn participant_id(&self) -> ParticipantId {
        self.participant
    }
}

impl Actor for ClientSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Registers the connection with the game server.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.start_heartbeat(ctx);
        self.server_addr.do_send(Connect {
            participant: self.participant,
            addr: ctx.address().recipient(),
        });
    }

    /// Called when the session stops. Triggers queue or game cleanup.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.server_addr.do_send(Disconnect {
            participant: self.participant,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ClientSession {
    /// Handles incoming WebSocket messages from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                info!("[Session] Protocol error from {}: {}", self.participant, e);
                ctx.stop();
                return;
            }
        };

        match msg {
            ws::Message::Text(text) => {
                self.last_heartbeat = Instant::now();
                if !self.accept_request(ctx) {
                    return;
                }
                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(ClientWsMessage::Ping) => {}
                    Ok(msg) => self.server_addr.do_send(ProcessClientMessage {
                        participant: self.participant,
                        msg,
                    }),
                    Err(e) => {
                        self.send_error(ctx, "INVALID_MESSAGE", "Invalid client message", None);
                        info!("[Session] Unparseable message from {}: {}", self.participant, e);
                    }
                }
            }
            ws::Message::Binary(_) => {
                self.send_error(ctx, "INVALID_MESSAGE", "Binary frames are not supported", None);
            }
            ws::Message::Ping(msg) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&msg);
            }
            ws::Message::Pong(_) => {
                self.last_heartbeat = Instant::now();
            }
            ws::Message::Close(reason) => {
                ctx.close(reason);
                ctx.stop();
            }
            ws::Message::Continuation(_) | ws::Message::Nop => {}
        }
    }
}

impl Handler<ServerWsMessage> for ClientSession {
    type Result = ();

    /// Handles messages sent from the game server to this client.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        match &msg {
            ServerWsMessage::Error { code, .. } => {
                if !self.anti_spam.should_send_error(code, &self.participant) {
                    return;
                }
            }
            _ => self.anti_spam.reset_error_suppression(),
        }
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                // Serialization error: notify client and close connection.
                error!("[Session] Failed to serialize ServerWsMessage: {}", e);
                ctx.text(r#"{"action":"error","data":{"code":"INTERNAL","message":"Internal server error"}}"#);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for game clients.
///
/// Every connection gets a fresh participant id; clients stay anonymous.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let participant = ParticipantId::new();
    ws::start(
        ClientSession::new(participant, data.game_server.clone()),
        &req,
        stream,
    )
}
