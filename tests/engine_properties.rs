//! Property tests for the game engine.
//!
//! Random column sequences (including out-of-range columns) are played
//! against a fresh engine and every step is checked against the rules:
//! gravity, immutability of placed pieces, strict turn alternation, and a
//! terminal state that is reached at most once and never left.

use connect_four::game::{Cell, DropOutcome, GameEngine, GameOutcome, MoveError, Player, Seat};
use proptest::prelude::*;

fn new_engine(height: usize, width: usize) -> GameEngine {
    GameEngine::with_dimensions(Player::new("red"), Player::new("yellow"), height, width)
        .expect("valid dimensions")
}

fn empty_cells_in_column(engine: &GameEngine, column: usize) -> usize {
    (0..engine.board().height())
        .filter(|&row| engine.board().get(row, column) == Cell::Empty)
        .count()
}

proptest! {
    #[test]
    fn drops_follow_the_rules(
        height in 1usize..8,
        width in 1usize..9,
        columns in prop::collection::vec(0usize..10, 0..120),
    ) {
        let mut engine = new_engine(height, width);
        let mut was_over = false;

        for column in columns {
            let before = engine.clone();
            let result = engine.drop_piece(column);

            match result {
                Err(reason) => {
                    let expected = if before.is_over() {
                        MoveError::GameAlreadyOver
                    } else if column >= width {
                        MoveError::InvalidColumn
                    } else {
                        MoveError::ColumnFull
                    };
                    prop_assert_eq!(reason, expected);
                    prop_assert_eq!(&engine, &before);
                }
                Ok(outcome) => {
                    prop_assert!(!before.is_over());
                    prop_assert!(column < width);

                    // Lands on the lowest empty row of the column
                    let landing = empty_cells_in_column(&before, column) - 1;
                    prop_assert_eq!(
                        engine.board().get(landing, column),
                        Cell::Occupied(before.current_seat())
                    );

                    // Exactly one new piece, nothing overwritten
                    prop_assert_eq!(engine.move_count(), before.move_count() + 1);
                    for row in 0..height {
                        for col in 0..width {
                            let old = before.board().get(row, col);
                            if old != Cell::Empty {
                                prop_assert_eq!(engine.board().get(row, col), old);
                            }
                        }
                    }

                    match outcome {
                        DropOutcome::Placed { row, column: placed } => {
                            prop_assert_eq!((row, placed), (landing, column));
                            prop_assert!(!engine.is_over());
                            prop_assert_eq!(engine.current_seat(), before.current_seat().other());
                        }
                        DropOutcome::Win(player) => {
                            prop_assert_eq!(&player, before.current_player());
                            prop_assert!(engine.check_win(before.current_seat()));
                            prop_assert!(!engine.board().is_full());
                            prop_assert_eq!(
                                engine.outcome(),
                                Some(GameOutcome::Winner(before.current_seat()))
                            );
                        }
                        DropOutcome::Tie => {
                            prop_assert!(engine.board().is_full());
                            prop_assert_eq!(engine.outcome(), Some(GameOutcome::Tie));
                        }
                    }
                }
            }

            // Over flips at most once and never back
            if was_over {
                prop_assert!(engine.is_over());
            }
            was_over = engine.is_over();
        }
    }

    #[test]
    fn non_terminal_game_has_no_four_in_a_row(
        columns in prop::collection::vec(0usize..7, 0..42),
    ) {
        let mut engine = new_engine(6, 7);
        for column in columns {
            let _ = engine.drop_piece(column);
        }
        if !engine.is_over() {
            prop_assert!(!engine.check_win(Seat::First));
            prop_assert!(!engine.check_win(Seat::Second));
            prop_assert_eq!(engine.legal_columns().is_empty(), engine.board().is_full());
        }
    }
}
