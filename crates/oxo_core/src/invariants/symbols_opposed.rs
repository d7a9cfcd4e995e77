//! Symbol assignment invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: the human and the computer hold opposite symbols, or
/// neither holds one and no turn is set.
pub struct SymbolsOpposedInvariant;

impl Invariant<GameState> for SymbolsOpposedInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.player_symbol(), state.computer_symbol()) {
            (Some(player), Some(computer)) => player.opponent() == computer,
            (None, None) => state.current_turn().is_none(),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Player and computer hold opposite symbols"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_half_assigned_fails() {
        let mut state = GameState::new();
        state.player = Some(Symbol::Cross);
        assert!(!SymbolsOpposedInvariant::holds(&state));
        state.computer = Some(Symbol::Circle);
        assert!(SymbolsOpposedInvariant::holds(&state));
    }
}
