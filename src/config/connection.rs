/// Websocket connection liveness settings.
///
/// The server pings every client on `HEARTBEAT_INTERVAL_SECS`; a client that stays silent
/// for `CLIENT_TIMEOUT_SECS` is considered disconnected.
pub const HEARTBEAT_INTERVAL_SECS: u64 = 5;

/// Time (in seconds) before a silent client is dropped.
pub const CLIENT_TIMEOUT_SECS: u64 = 30;
