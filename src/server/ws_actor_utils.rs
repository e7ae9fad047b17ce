use actix::ActorContext;
use actix_web_actors::ws;
use serde_json::{json, Value};

use crate::config::anti_spam::MAX_REQUESTS_PER_SECOND;
use crate::server::anti_spam::AntiSpamState;
use crate::server::types::ParticipantId;
use crate::server::ws_error::ws_error_message;

/// Shared helpers for websocket actors: error frames and flood protection.
pub trait WsActorUtils {
    fn anti_spam(&mut self) -> &mut AntiSpamState;
    fn participant_id(&self) -> ParticipantId;

    /// Sends a rate-limit error, closes the socket and stops the actor.
    fn send_flood_and_close<A>(&mut self, ctx: &mut ws::WebsocketContext<A>)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let context = json!({
            "participant": self.participant_id(),
            "maxRequestsPerSecond": MAX_REQUESTS_PER_SECOND,
        });
        ctx.text(ws_error_message(
            "RATE_LIMITED",
            "Too many requests. The connection will be closed.",
            Some(context),
        ));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Too many requests".into()),
        }));
        ctx.stop();
    }

    /// Records an incoming request. Returns false (and closes) when the client floods.
    fn accept_request<A>(&mut self, ctx: &mut ws::WebsocketContext<A>) -> bool
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let participant = self.participant_id();
        if self.anti_spam().record_request(&participant) {
            self.send_flood_and_close(ctx);
            return false;
        }
        true
    }

    /// Sends an error frame unless the same code was the last error sent.
    fn send_error<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        code: &str,
        message: &str,
        context: Option<Value>,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let participant = self.participant_id();
        if self.anti_spam().should_send_error(code, &participant) {
            ctx.text(ws_error_message(code, message, context));
        }
    }
}
