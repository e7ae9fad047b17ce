//! Game sessions: storage, orchestration, the game server actor and client connections.

pub mod manager;
pub mod messages;
pub mod server;
pub mod session;
pub mod store;

pub use manager::SessionManager;
pub use server::GameServer;
