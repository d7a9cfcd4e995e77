//! Core domain types for the circle/cross game.

use super::action::Move;
use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Circle (always moves first).
    #[display("○")]
    #[strum(serialize = "circle", serialize = "o", serialize = "○")]
    Circle,
    /// Cross.
    #[display("✕")]
    #[strum(serialize = "cross", serialize = "x", serialize = "✕")]
    Cross,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::Circle => Symbol::Cross,
            Symbol::Cross => Symbol::Circle,
        }
    }

    /// Returns the plain word for this symbol.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Circle => "circle",
            Symbol::Cross => "cross",
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }

    /// Parses a single board character.
    ///
    /// Accepts `○`/`o`/`O` for circle, `✕`/`x`/`X` for cross and
    /// `.`/`_`/`-` for an empty cell.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '○' | 'o' | 'O' => Some(Cell::Marked(Symbol::Circle)),
            '✕' | 'x' | 'X' => Some(Cell::Marked(Symbol::Cross)),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from explicit cell values.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns every empty position in index order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns true when every cell is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// Counts the cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(symbol))
            .count()
    }

    /// Writes `symbol` into an empty cell. Occupied cells are left alone.
    ///
    /// Returns whether the mark was placed.
    pub(crate) fn place(&mut self, pos: Position, symbol: Symbol) -> bool {
        let cell = &mut self.cells[pos.to_index()];
        if *cell != Cell::Empty {
            return false;
        }
        *cell = Cell::Marked(symbol);
        true
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(symbol) => write!(f, "{symbol}")?,
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is not a mark, an empty marker or whitespace.
    #[display("Unexpected board character {:?}", _0)]
    BadChar(char),
    /// The string did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell characters, ignoring whitespace and `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            cells.push(Cell::from_char(c).ok_or(BoardParseError::BadChar(c))?);
        }
        let len = cells.len();
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(len))?;
        Ok(Self::from_cells(cells))
    }
}

/// Phase of a round. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Phase {
    /// Waiting for the human to pick a symbol.
    #[default]
    Selecting,
    /// Round in progress.
    Playing,
    /// Someone completed a line.
    Win,
    /// Full board, no line.
    Draw,
}

/// What the status display shows for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// Selecting phase.
    #[display("Choose your symbol")]
    ChooseSymbol,
    /// Playing phase, showing whose mark goes next.
    #[display("Current turn: {}", _0)]
    Turn(Symbol),
    /// The human completed a line.
    #[display("You win!")]
    PlayerWins,
    /// The computer completed a line.
    #[display("Computer wins!")]
    ComputerWins,
    /// Full board without a line.
    #[display("It's a draw!")]
    Draw,
}

/// Complete game state.
///
/// Fields are only mutated by the functions in [`crate::transition`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) player: Option<Symbol>,
    pub(crate) computer: Option<Symbol>,
    pub(crate) turn: Option<Symbol>,
    pub(crate) phase: Phase,
    pub(crate) winner: Option<Symbol>,
    pub(crate) history: Vec<Move>,
    pub(crate) round: u64,
}

impl GameState {
    /// Creates a fresh state in the selecting phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human's symbol.
    pub fn player_symbol(&self) -> Option<Symbol> {
        self.player
    }

    /// Returns the computer's symbol.
    pub fn computer_symbol(&self) -> Option<Symbol> {
        self.computer
    }

    /// Returns the symbol whose move is next.
    pub fn current_turn(&self) -> Option<Symbol> {
        self.turn
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the winner; only set in [`Phase::Win`].
    pub fn winner(&self) -> Option<Symbol> {
        self.winner
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the round counter.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Returns true when the human may click a cell right now.
    pub fn awaits_player(&self) -> bool {
        self.phase == Phase::Playing && self.turn.is_some() && self.turn == self.player
    }

    /// Returns the status display for this state.
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Selecting => Status::ChooseSymbol,
            Phase::Playing => self.turn.map(Status::Turn).unwrap_or(Status::ChooseSymbol),
            Phase::Win if self.winner.is_some() && self.winner == self.player => {
                Status::PlayerWins
            }
            Phase::Win => Status::ComputerWins,
            Phase::Draw => Status::Draw,
        }
    }

    /// Returns the "You: ○ | Computer: ✕" line once symbols are assigned.
    pub fn players_line(&self) -> Option<String> {
        match (self.player, self.computer) {
            (Some(player), Some(computer)) => {
                Some(format!("You: {player} | Computer: {computer}"))
            }
            _ => None,
        }
    }
}
