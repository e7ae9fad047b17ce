use log::warn;
use std::time::{Duration, Instant};

use crate::config::anti_spam::MAX_REQUESTS_PER_SECOND;
use crate::server::types::ParticipantId;

/// Tracks flood state for a single websocket connection.
pub struct AntiSpamState {
    // Last error code sent (for suppression)
    last_error_code: Option<String>,
    // Timestamp of last reset (for per-second counters)
    last_tick: Instant,
    // Number of requests received in the current second
    requests_this_tick: u32,
}

impl Default for AntiSpamState {
    fn default() -> Self {
        Self::new()
    }
}

impl AntiSpamState {
    pub fn new() -> Self {
        Self {
            last_error_code: None,
            last_tick: Instant::now(),
            requests_this_tick: 0,
        }
    }

    /// Call at the start of every incoming request (message).
    /// Returns true if the connection went over the per-second limit.
    pub fn record_request(&mut self, participant: &ParticipantId) -> bool {
        self.record_request_at(participant, Instant::now())
    }

    fn record_request_at(&mut self, participant: &ParticipantId, now: Instant) -> bool {
        self.tick(now);
        self.requests_this_tick += 1;
        if self.requests_this_tick > MAX_REQUESTS_PER_SECOND {
            warn!(
                "[AntiSpam] Participant {} sent {} requests within a second",
                participant, self.requests_this_tick
            );
            return true;
        }
        false
    }

    /// Call when sending an error. Returns true if the error should be sent (not suppressed).
    pub fn should_send_error(&mut self, error_code: &str, participant: &ParticipantId) -> bool {
        if self.last_error_code.as_deref() == Some(error_code) {
            warn!("[AntiSpam] Suppressed duplicate error '{}' for participant={}", error_code, participant);
            return false;
        }
        self.last_error_code = Some(error_code.to_string());
        true
    }

    /// Call when a non-error message goes out (the client made progress).
    pub fn reset_error_suppression(&mut self) {
        self.last_error_code = None;
    }

    /// Reset per-second counters if a new second has started.
    fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_tick) >= Duration::from_secs(1) {
            self.last_tick = now;
            self.requests_this_tick = 0;
        }
    }
}
