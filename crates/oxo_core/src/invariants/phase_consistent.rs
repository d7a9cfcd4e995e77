//! Phase consistency invariant: the board and fields agree with the phase.

use super::Invariant;
use crate::rules::{check_winner, is_full};
use crate::{GameState, Phase};

/// Invariant: each phase implies a specific shape of state.
///
/// - Selecting: blank board, no symbols, no turn, no winner
/// - Playing: a turn is set, no winner, no completed line, board not full
/// - Win: the winner owns the first completed line
/// - Draw: full board, no completed line, no winner
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let line = check_winner(state.board());
        match state.phase() {
            Phase::Selecting => {
                state.board().is_blank()
                    && state.player_symbol().is_none()
                    && state.computer_symbol().is_none()
                    && state.current_turn().is_none()
                    && state.winner().is_none()
            }
            Phase::Playing => {
                state.current_turn().is_some()
                    && state.winner().is_none()
                    && line.is_none()
                    && !is_full(state.board())
            }
            Phase::Win => state.winner().is_some() && state.winner() == line,
            Phase::Draw => is_full(state.board()) && line.is_none() && state.winner().is_none(),
        }
    }

    fn description() -> &'static str {
        "Phase agrees with board, symbols and winner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_fresh_state_holds() {
        assert!(PhaseConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_win_without_line_fails() {
        let mut state = GameState::new();
        state.player = Some(Symbol::Circle);
        state.computer = Some(Symbol::Cross);
        state.turn = Some(Symbol::Circle);
        state.phase = Phase::Win;
        state.winner = Some(Symbol::Circle);
        assert!(!PhaseConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_draw_on_partial_board_fails() {
        let mut state = GameState::new();
        state.player = Some(Symbol::Circle);
        state.computer = Some(Symbol::Cross);
        state.turn = Some(Symbol::Circle);
        state.phase = Phase::Draw;
        state.board = "oxo xox xo.".parse().unwrap();
        assert!(!PhaseConsistentInvariant::holds(&state));
    }
}
