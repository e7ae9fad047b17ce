//! Board engine: Kalah rules as pure functions over a 14-slot board.

pub mod board;
pub mod types;

#[cfg(test)]
mod tests;
