//! History consistency invariant: the move log replays to the board.

use super::Invariant;
use crate::{Board, GameState, Symbol};

/// Invariant: replaying the history onto a blank board reproduces the
/// board, and marks alternate starting with circle.
///
/// Every move in history corresponds to exactly one marked cell. No
/// moves are missing, no cells are marked without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replay = Board::new();
        let mut expected = Symbol::Circle;
        for mv in state.history() {
            if mv.symbol != expected || !replay.place(mv.position, mv.symbol) {
                return false;
            }
            expected = expected.opponent();
        }

        replay == *state.board()
    }

    fn description() -> &'static str {
        "Move history replays to the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_cross_first_fails() {
        let mut state = GameState::new();
        state.board = "x.. ... ...".parse().unwrap();
        state.history = vec![Move::new(Symbol::Cross, Position::TopLeft)];
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_missing_history_fails() {
        let mut state = GameState::new();
        state.board = "o.. ... ...".parse().unwrap();
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_alternating_history_holds() {
        let mut state = GameState::new();
        state.board = "o.. .x. ...".parse().unwrap();
        state.history = vec![
            Move::new(Symbol::Circle, Position::TopLeft),
            Move::new(Symbol::Cross, Position::Center),
        ];
        assert!(HistoryConsistentInvariant::holds(&state));
    }
}
