use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MoveError;
use crate::game::board::{apply_move, Board};
use crate::game::types::{PlayerSlot, Winner};

const P1: PlayerSlot = PlayerSlot::Player1;
const P2: PlayerSlot = PlayerSlot::Player2;

fn legal_moves(board: &Board, player: PlayerSlot) -> Vec<usize> {
    player.pockets().filter(|&i| board.slots()[i] > 0).collect()
}

#[test]
fn starting_board_layout() {
    let board = Board::new();
    assert_eq!(board.slots(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(board.total_stones(), 48);
    assert!(!board.is_terminal());
}

#[test]
fn pocket_two_opening_reaches_the_store() {
    let outcome = apply_move(&Board::new(), 2, P1).expect("legal opening");
    assert_eq!(outcome.board.slots(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(outcome.landing_slot, 6);
    assert!(outcome.extra_turn);
    assert_eq!(outcome.next_player, P1);
    assert_eq!(outcome.captured, None);
    assert!(!outcome.game_over);
}

#[test]
fn landing_in_own_pocket_passes_the_turn() {
    let outcome = apply_move(&Board::new(), 1, P1).expect("legal opening");
    assert_eq!(outcome.board.slots(), &[4, 0, 5, 5, 5, 5, 0, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(outcome.landing_slot, 5);
    assert_eq!(outcome.captured, None);
    assert_eq!(outcome.next_player, P2);
}

#[test]
fn single_stone_next_to_store_earns_extra_turn() {
    let board = Board::from_slots([4, 4, 4, 4, 4, 1, 0, 4, 4, 4, 4, 4, 4, 0]);
    let outcome = apply_move(&board, 5, P1).unwrap();
    assert_eq!(outcome.board.slots(), &[4, 4, 4, 4, 4, 0, 1, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(outcome.next_player, P1);
    assert!(outcome.extra_turn);
}

#[test]
fn player_two_extra_turn_uses_store_thirteen() {
    let board = Board::new();
    let outcome = apply_move(&board, 9, P2).unwrap();
    assert_eq!(outcome.landing_slot, 13);
    assert_eq!(outcome.next_player, P2);
    assert_eq!(outcome.board.store(P2), 1);
}

#[test]
fn capture_takes_both_piles() {
    // Pocket 0 sows its single stone into empty pocket 1, opposite pocket 11 holds 5.
    let board = Board::from_slots([1, 0, 4, 4, 4, 4, 3, 4, 4, 4, 4, 5, 4, 2]);
    let outcome = apply_move(&board, 0, P1).unwrap();
    let slots = outcome.board.slots();
    assert_eq!(outcome.landing_slot, 1);
    assert_eq!(outcome.captured, Some(6));
    assert_eq!(slots[1], 0);
    assert_eq!(slots[11], 0);
    assert_eq!(slots[6], 3 + 6);
    assert_eq!(outcome.next_player, P2);
    assert_eq!(outcome.board.total_stones(), board.total_stones());
}

#[test]
fn player_two_capture_mirrors() {
    // Pocket 8 sows into empty pocket 9, opposite pocket 3 holds 7.
    let board = Board::from_slots([4, 4, 4, 7, 4, 4, 0, 4, 1, 0, 4, 4, 4, 0]);
    let outcome = apply_move(&board, 8, P2).unwrap();
    assert_eq!(outcome.captured, Some(8));
    assert_eq!(outcome.board.slots()[3], 0);
    assert_eq!(outcome.board.slots()[9], 0);
    assert_eq!(outcome.board.store(P2), 8);
    assert_eq!(outcome.next_player, P1);
}

#[test]
fn no_capture_when_opposite_pocket_is_empty() {
    let board = Board::from_slots([1, 0, 4, 4, 4, 4, 0, 4, 4, 4, 4, 0, 4, 0]);
    let outcome = apply_move(&board, 0, P1).unwrap();
    assert_eq!(outcome.captured, None);
    assert_eq!(outcome.board.slots()[1], 1);
    assert_eq!(outcome.board.store(P1), 0);
}

#[test]
fn no_capture_on_opponent_side() {
    // Last stone lands in empty pocket 7, which belongs to player 2.
    let board = Board::from_slots([4, 4, 4, 4, 4, 2, 0, 0, 4, 4, 4, 4, 4, 0]);
    let outcome = apply_move(&board, 5, P1).unwrap();
    assert_eq!(outcome.landing_slot, 7);
    assert_eq!(outcome.captured, None);
    assert_eq!(outcome.board.slots()[7], 1);
}

#[test]
fn sowing_skips_the_opponent_store() {
    let board = Board::from_slots([0, 4, 4, 4, 4, 10, 0, 2, 2, 2, 2, 2, 2, 5]);
    let outcome = apply_move(&board, 5, P1).unwrap();
    let slots = outcome.board.slots();
    assert_eq!(slots[13], 5);
    assert_eq!(slots[6], 1);
    assert_eq!(outcome.landing_slot, 2);
    assert_eq!(slots[0], 1);
    assert_eq!(slots[2], 5);
    assert_eq!(outcome.board.total_stones(), board.total_stones());
}

#[test]
fn emptying_a_side_sweeps_the_other() {
    let board = Board::from_slots([0, 0, 0, 0, 0, 1, 20, 1, 2, 3, 0, 0, 4, 17]);
    let outcome = apply_move(&board, 5, P1).unwrap();
    assert!(outcome.game_over);
    assert_eq!(outcome.board.slots(), &[0, 0, 0, 0, 0, 0, 21, 0, 0, 0, 0, 0, 0, 27]);
    assert_eq!(outcome.board.winner(), Winner::Player2);
}

#[test]
fn rejected_moves_do_not_touch_the_board() {
    let board = Board::from_slots([0, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 4]);
    let before = board;
    assert_eq!(apply_move(&board, 14, P1), Err(MoveError::OutOfRange(14)));
    assert_eq!(apply_move(&board, 6, P1), Err(MoveError::IsStore(6)));
    assert_eq!(apply_move(&board, 13, P2), Err(MoveError::IsStore(13)));
    assert_eq!(
        apply_move(&board, 8, P1),
        Err(MoveError::WrongSide { pocket: 8, player: P1 })
    );
    assert_eq!(
        apply_move(&board, 2, P2),
        Err(MoveError::WrongSide { pocket: 2, player: P2 })
    );
    assert_eq!(apply_move(&board, 0, P1), Err(MoveError::EmptyPocket(0)));
    assert_eq!(board, before);
}

#[test]
fn winner_compares_stores() {
    let tie = Board::from_slots([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]);
    assert_eq!(tie.winner(), Winner::Tie);
    let p1 = Board::from_slots([0, 0, 0, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 18]);
    assert_eq!(p1.winner(), Winner::Player1);
}

/// Plays complete random games and checks the invariants on every move.
#[test]
fn random_playouts_keep_the_invariants() {
    for seed in 0..200u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut player = P1;
        let total = board.total_stones();

        for _ in 0..500 {
            let moves = legal_moves(&board, player);
            assert!(!moves.is_empty(), "active game must leave the mover a legal move");
            let pocket = moves[rng.random_range(0..moves.len())];
            let opponent_store = board.store(player.opponent());
            let mover_store = board.store(player);

            let outcome = apply_move(&board, pocket, player).unwrap();

            assert_eq!(outcome.board.total_stones(), total, "seed {seed}");
            assert!(outcome.board.store(player) >= mover_store);
            if outcome.game_over {
                assert!(PlayerSlot::Player1.pockets().all(|i| outcome.board.slots()[i] == 0));
                assert!(PlayerSlot::Player2.pockets().all(|i| outcome.board.slots()[i] == 0));
                break;
            }
            assert_eq!(outcome.board.store(player.opponent()), opponent_store);
            assert_eq!(outcome.extra_turn, outcome.landing_slot == player.store());
            assert_eq!(
                outcome.next_player,
                if outcome.extra_turn { player } else { player.opponent() }
            );

            board = outcome.board;
            player = outcome.next_player;
        }
    }
}
