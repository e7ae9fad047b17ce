/// Matchmaking module: the queue of participants waiting for an opponent.

pub mod queue;

pub use queue::MatchmakingQueue;
