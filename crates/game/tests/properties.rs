//! Property-based tests for the game engine.
//!
//! States are generated by random legal play from the empty board, so only
//! reachable positions are tested.

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uttt_core::Player;
use uttt_game::{win_lines, ActiveBoard, GameState, Move};

// =============================================================================
// Strategies
// =============================================================================

/// Play up to `num_moves` random legal moves from the empty board.
fn random_game(dim: usize, seed: u64, num_moves: usize) -> (GameState, Vec<Move>) {
    let mut state = GameState::new(dim).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut played = Vec::new();

    for _ in 0..num_moves {
        if state.is_terminal() {
            break;
        }
        let (_, moves) = state.legal_moves();
        let mv = moves[rng.gen_range(0..moves.len())];
        state.apply_move(mv).unwrap();
        played.push(mv);
    }

    (state, played)
}

/// A reachable 3×3 state.
fn arb_state() -> impl Strategy<Value = GameState> {
    (any::<u64>(), 0usize..81).prop_map(|(seed, n)| random_game(3, seed, n).0)
}

/// Board side and seed for a full random game.
fn arb_game() -> impl Strategy<Value = (usize, u64)> {
    (2usize..=4, any::<u64>())
}

fn marked(state: &GameState) -> usize {
    state
        .board()
        .sub_boards()
        .flat_map(|cells| cells.iter())
        .filter(|c| c.is_some())
        .count()
}

// =============================================================================
// Engine invariants
// =============================================================================

proptest! {
    /// Empty plus marked cells always add up to the whole board.
    #[test]
    fn prop_squares_conserved(state in arb_state()) {
        prop_assert_eq!(state.squares_left() + marked(&state), state.total_cells());
    }

    /// Every applied move lands on an empty cell, leaves all other cells
    /// alone, and flips the player to move.
    #[test]
    fn prop_cells_write_once((dim, seed) in arb_game()) {
        let (_, moves) = random_game(dim, seed, usize::MAX);
        let mut state = GameState::new(dim).unwrap();

        for mv in moves {
            let before = state.clone();
            prop_assert_eq!(before.sub_board(mv.board)[mv.cell], None);

            state.apply_move(mv).unwrap();

            prop_assert_eq!(state.sub_board(mv.board)[mv.cell], Some(before.current_player()));
            prop_assert_eq!(state.current_player(), before.current_player().opposite());
            prop_assert_eq!(state.squares_left(), before.squares_left() - 1);
            for board in 0..dim * dim {
                for cell in 0..dim * dim {
                    if (board, cell) != (mv.board, mv.cell) {
                        prop_assert_eq!(
                            state.sub_board(board)[cell],
                            before.sub_board(board)[cell]
                        );
                    }
                }
            }
        }
    }

    /// Meta-board owners never change once set, and the winner is set at
    /// most once, on the final move.
    #[test]
    fn prop_claims_are_permanent((dim, seed) in arb_game()) {
        let (_, moves) = random_game(dim, seed, usize::MAX);
        let mut state = GameState::new(dim).unwrap();
        let last = moves.len().saturating_sub(1);

        for (i, mv) in moves.into_iter().enumerate() {
            let before = state.meta_board().to_vec();
            state.apply_move(mv).unwrap();

            for (board, owner) in before.iter().enumerate() {
                if owner.is_some() {
                    prop_assert_eq!(state.meta_board()[board], *owner);
                } else if board != mv.board {
                    prop_assert_eq!(state.meta_board()[board], None);
                }
            }
            if i < last {
                prop_assert_eq!(state.winner(), None);
            }
        }
        prop_assert!(state.is_terminal());
    }

    /// Legal moves are exactly the empty cells of the active sub-board, or
    /// of all sub-boards when unconstrained, in ascending order.
    #[test]
    fn prop_legal_moves_match_constraint(state in arb_state()) {
        prop_assume!(!state.is_terminal());
        let (active, moves) = state.legal_moves();

        prop_assert!(!moves.is_empty());
        prop_assert!(moves.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(moves.iter().all(|m| state.sub_board(m.board)[m.cell].is_none()));
        prop_assert!(moves.iter().all(|m| state.is_legal(*m)));

        match active {
            ActiveBoard::Board(board) => {
                let empty = state.sub_board(board).iter().filter(|c| c.is_none()).count();
                prop_assert!(moves.iter().all(|m| m.board == board));
                prop_assert_eq!(moves.len(), empty);
            }
            ActiveBoard::Any => prop_assert_eq!(moves.len(), state.squares_left()),
        }
    }

    /// A cloned state can be played on without touching its source.
    #[test]
    fn prop_clone_is_independent(state in arb_state(), seed in any::<u64>()) {
        prop_assume!(!state.is_terminal());
        let snapshot = state.clone();
        let mut clone = state.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        while !clone.is_terminal() {
            let (_, moves) = clone.legal_moves();
            clone.apply_move(moves[rng.gen_range(0..moves.len())]).unwrap();
        }

        prop_assert_eq!(&state, &snapshot);
        prop_assert_eq!(state.meta_board(), snapshot.meta_board());
        prop_assert_eq!(state.squares_left(), snapshot.squares_left());
        prop_assert_eq!(state.current_player(), snapshot.current_player());
    }

    /// Adding marks never undoes a won line.
    #[test]
    fn prop_is_won_monotonic(
        marks in proptest::collection::vec(
            prop_oneof![Just(None), Just(Some(Player::X)), Just(Some(Player::O))],
            9,
        ),
        line in 0usize..8,
        extra in proptest::collection::vec(0usize..9, 0..9),
    ) {
        let table = win_lines(3).unwrap();
        let mut marks = marks;
        for &i in &table.lines()[line] {
            marks[i] = Some(Player::X);
        }
        prop_assert!(table.is_won(&marks, Player::X));

        for i in extra {
            marks[i] = Some(Player::X);
        }
        prop_assert!(table.is_won(&marks, Player::X));
    }
}
