// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Wire protocol and outbound delivery
//! - Matchmaking queue
//! - Game session orchestration (session store, move arbitration, disconnects)

pub mod anti_spam;
pub mod broadcaster;
pub mod game_session;
pub mod matchmaking;
pub mod protocol;
pub mod router;
pub mod state;
pub mod types;
pub mod ws_actor_utils;
pub mod ws_error;
