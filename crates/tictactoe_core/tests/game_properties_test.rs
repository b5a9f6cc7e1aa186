//! Property tests: arbitrary click sequences never break the game rules.

use proptest::{collection::vec, prelude::*};
use tictactoe_core::{
    Game, GameInvariants, GameState, InvariantSet, Outcome, Player, Position, Square,
};

fn positions() -> impl Strategy<Value = Vec<Position>> {
    vec((0usize..9).prop_map(|i| Position::from_index(i).unwrap()), 0..30)
}

proptest! {
    #[test]
    fn invariants_hold_after_every_call(moves in positions()) {
        let mut game = Game::new();
        for pos in moves {
            game.apply_move(pos);
            prop_assert!(GameInvariants::check_all(game.state()).is_ok());
        }
    }

    #[test]
    fn rejected_moves_change_nothing(moves in positions()) {
        let mut game = Game::new();
        for pos in moves {
            let before = game.state().clone();
            let rejected = before.outcome() != Outcome::InProgress
                || before.board().get(pos) != Square::Empty;
            let after = game.apply_move(pos).clone();
            if rejected {
                prop_assert_eq!(after, before);
            } else {
                prop_assert_eq!(after.history().len(), before.history().len() + 1);
            }
        }
    }

    #[test]
    fn accepted_moves_toggle_turn_unless_game_ends(moves in positions()) {
        let mut game = Game::new();
        for pos in moves {
            let before = game.state().clone();
            let after = game.apply_move(pos).clone();
            if after.history().len() == before.history().len() {
                continue;
            }
            let placed = after.board().get(pos);
            prop_assert_eq!(placed, Square::Occupied(before.current_player()));
            match after.outcome() {
                Outcome::InProgress => {
                    prop_assert_eq!(after.current_player(), before.current_player().opponent());
                }
                Outcome::Won(_) | Outcome::Draw => {
                    prop_assert_eq!(after.current_player(), before.current_player());
                }
            }
        }
    }

    #[test]
    fn reset_always_restores_initial_state(moves in positions()) {
        let mut game = Game::new();
        for pos in moves {
            game.apply_move(pos);
        }
        game.reset();
        prop_assert_eq!(game.state(), &GameState::new());
        prop_assert_eq!(game.state().current_player(), Player::X);
    }

    #[test]
    fn valid_moves_play_out_to_a_terminal_outcome(picks in vec(0usize..9, 9)) {
        let mut game = Game::new();
        for pick in picks {
            if game.state().outcome() != Outcome::InProgress {
                break;
            }
            let open = Position::valid_moves(game.state().board());
            game.apply_move(open[pick % open.len()]);
        }
        prop_assert!(game.state().outcome() != Outcome::InProgress);
    }
}
