//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use oxo_core::{Phase, Position, Symbol};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pick a symbol directly.
    ChooseSymbol(Symbol),
    /// Toggle the highlighted symbol on the selection screen.
    ToggleSymbol,
    /// Click the cell at this index (0-8).
    SelectIndex(usize),
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Click whatever is highlighted.
    Activate,
    /// Start a new round.
    Restart,
    /// Leave the game.
    Quit,
    /// Key has no binding in this phase.
    Nothing,
}

/// Maps a key to an action for the given phase.
pub fn map_key(key: KeyCode, phase: Phase) -> Action {
    match (phase, key) {
        (_, KeyCode::Char('q') | KeyCode::Esc) => Action::Quit,

        (Phase::Selecting, KeyCode::Char('o' | 'O' | '1')) => Action::ChooseSymbol(Symbol::Circle),
        (Phase::Selecting, KeyCode::Char('x' | 'X' | '2')) => Action::ChooseSymbol(Symbol::Cross),
        (Phase::Selecting, KeyCode::Left | KeyCode::Right | KeyCode::Tab) => Action::ToggleSymbol,
        (Phase::Selecting, KeyCode::Enter | KeyCode::Char(' ')) => Action::Activate,
        (Phase::Selecting, _) => Action::Nothing,

        (_, KeyCode::Char('r' | 'R')) => Action::Restart,
        (_, KeyCode::Char(c @ '1'..='9')) => Action::SelectIndex(c as usize - '1' as usize),
        (_, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => Action::MoveCursor(key),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Action::Activate,
        _ => Action::Nothing,
    }
}

/// Moves the cursor one cell; edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
