//! Main entry point for the Mancala backend server.
//!
//! Initializes logging and the game server actor, then launches the HTTP server with the
//! liveness endpoint and the game WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use config::server::ServerConfig;
use server::game_session::{GameServer, SessionManager};
use server::game_session::store::SessionStore;
use server::matchmaking::MatchmakingQueue;

pub mod config;
mod error;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from RUST_LOG (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    // The game server owns the waiting queue and every running session.
    let manager = SessionManager::new(MatchmakingQueue::new(), SessionStore::new());
    let game_server = GameServer::new(manager).start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_server));

    info!("WebSocket server running on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(server::router::config)
            .default_service(web::to(server::router::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
