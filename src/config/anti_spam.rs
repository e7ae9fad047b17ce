/// Configuration for per-connection flood protection.
/// A connection sending more requests than this within one second is closed.
pub const MAX_REQUESTS_PER_SECOND: u32 = 20;
