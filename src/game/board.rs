//! Kalah board and the sowing rules.
//!
//! Slots 0-5 are player 1's pockets and slot 6 its store; slots 7-12 are player 2's
//! pockets and slot 13 its store. Everything here is pure: a move produces a new board.

use serde::{Deserialize, Serialize};

use crate::config::game::{BOARD_SLOTS, INITIAL_STONES_PER_POCKET, PLAYER1_STORE, PLAYER2_STORE};
use crate::error::MoveError;
use crate::game::types::{PlayerSlot, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    slots: [u32; BOARD_SLOTS],
}

/// Everything a caller needs to know after a move was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    /// Seat to move next. Meaningless once `game_over` is set.
    pub next_player: PlayerSlot,
    /// Slot that received the last sown stone.
    pub landing_slot: usize,
    /// Stones moved to the mover's store by a capture, including the capturing stone.
    pub captured: Option<u32>,
    pub extra_turn: bool,
    pub game_over: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: four stones in every pocket, empty stores.
    pub fn new() -> Self {
        let mut slots = [INITIAL_STONES_PER_POCKET; BOARD_SLOTS];
        slots[PLAYER1_STORE] = 0;
        slots[PLAYER2_STORE] = 0;
        Self { slots }
    }

    pub fn from_slots(slots: [u32; BOARD_SLOTS]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[u32; BOARD_SLOTS] {
        &self.slots
    }

    pub fn store(&self, player: PlayerSlot) -> u32 {
        self.slots[player.store()]
    }

    pub fn total_stones(&self) -> u32 {
        self.slots.iter().sum()
    }

    pub fn side_is_empty(&self, player: PlayerSlot) -> bool {
        player.pockets().all(|i| self.slots[i] == 0)
    }

    /// A game is over as soon as either side has no stones left in its pockets.
    pub fn is_terminal(&self) -> bool {
        self.side_is_empty(PlayerSlot::Player1) || self.side_is_empty(PlayerSlot::Player2)
    }

    /// Higher store wins; equal stores tie.
    pub fn winner(&self) -> Winner {
        let p1 = self.store(PlayerSlot::Player1);
        let p2 = self.store(PlayerSlot::Player2);
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Winner::Player1,
            std::cmp::Ordering::Less => Winner::Player2,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    /// Check that `player` may sow from `pocket` on this board.
    pub fn validate_move(&self, pocket: usize, player: PlayerSlot) -> Result<(), MoveError> {
        if pocket >= BOARD_SLOTS {
            return Err(MoveError::OutOfRange(pocket));
        }
        if pocket == PLAYER1_STORE || pocket == PLAYER2_STORE {
            return Err(MoveError::IsStore(pocket));
        }
        if !player.owns_pocket(pocket) {
            return Err(MoveError::WrongSide { pocket, player });
        }
        if self.slots[pocket] == 0 {
            return Err(MoveError::EmptyPocket(pocket));
        }
        Ok(())
    }

    /// Move every pocket's stones into the store on the same side.
    fn sweep(&mut self) {
        for player in [PlayerSlot::Player1, PlayerSlot::Player2] {
            let remaining: u32 = player.pockets().map(|i| std::mem::take(&mut self.slots[i])).sum();
            self.slots[player.store()] += remaining;
        }
    }
}

/// Sow the stones of `pocket` for `player` and resolve capture, extra turn and game end.
///
/// The input board is left untouched; a rejected move returns the reason without
/// producing a board.
pub fn apply_move(board: &Board, pocket: usize, player: PlayerSlot) -> Result<MoveOutcome, MoveError> {
    board.validate_move(pocket, player)?;

    let mut next = *board;
    let skipped_store = player.opponent().store();
    let mut stones = std::mem::take(&mut next.slots[pocket]);
    let mut index = pocket;
    while stones > 0 {
        index = (index + 1) % BOARD_SLOTS;
        if index == skipped_store {
            continue;
        }
        next.slots[index] += 1;
        stones -= 1;
    }

    let mut captured = None;
    if player.owns_pocket(index) && next.slots[index] == 1 {
        let opposite = (BOARD_SLOTS - 2) - index;
        if next.slots[opposite] > 0 {
            let taken = next.slots[opposite] + 1;
            next.slots[opposite] = 0;
            next.slots[index] = 0;
            next.slots[player.store()] += taken;
            captured = Some(taken);
        }
    }

    let extra_turn = index == player.store();
    let next_player = if extra_turn { player } else { player.opponent() };

    let game_over = next.is_terminal();
    if game_over {
        next.sweep();
    }

    Ok(MoveOutcome {
        board: next,
        next_player,
        landing_slot: index,
        captured,
        extra_turn,
        game_over,
    })
}
