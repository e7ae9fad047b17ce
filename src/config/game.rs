/// Game configuration constants.
///
/// This module defines the board layout used by the Kalah rules: six pockets per side,
/// one store per side, and the number of stones dealt into every pocket at start.
pub const POCKETS_PER_SIDE: usize = 6;

/// Stones placed in each pocket when a session is created.
pub const INITIAL_STONES_PER_POCKET: u32 = 4;

/// Total number of slots on the board (12 pockets + 2 stores).
pub const BOARD_SLOTS: usize = 2 * POCKETS_PER_SIDE + 2;

/// Index of player 1's store.
pub const PLAYER1_STORE: usize = POCKETS_PER_SIDE;

/// Index of player 2's store.
pub const PLAYER2_STORE: usize = BOARD_SLOTS - 1;
