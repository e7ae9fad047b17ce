//! Runtime server settings, read from the environment at startup.

use log::warn;

/// Address used when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port used when `PORT` is not set or cannot be parsed.
pub const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP/WebSocket server binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from `HOST` and `PORT`.
    pub fn from_env() -> Self {
        Self::from_values(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("[Config] Invalid PORT value {:?}, falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        Self { host, port }
    }
}
