/// Main configuration module.
///
/// Re-exports submodules for game rules, connection handling and server settings.
pub mod anti_spam;
pub mod connection;
pub mod game;
pub mod server;
