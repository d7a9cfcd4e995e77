//! Moves, tickets and the results of dispatching an event.
//!
//! Invalid actions are not errors. They come back as a [`Rejection`]
//! inside [`Reaction::Ignored`] so callers can log them and move on.

use super::{Position, Symbol};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{} -> {}", symbol, position)]
pub struct Move {
    /// The symbol placed.
    pub symbol: Symbol,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, position: Position) -> Self {
        Self { symbol, position }
    }
}

/// Handle for a computer move that is due.
///
/// Tickets are tied to the round they were issued in. A ticket from an
/// earlier round is stale and its move is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("ticket(round {})", round)]
pub struct MoveTicket {
    /// Round the ticket was issued for.
    pub round: u64,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A line was completed by this symbol.
    Winner(Symbol),
    /// Full board with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(*symbol),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "{} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Why an event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// Symbol selection outside the selecting phase.
    #[display("Symbols are already chosen")]
    NotSelecting,
    /// A move outside the playing phase.
    #[display("No round in progress")]
    NotPlaying,
    /// Cell click on a marked cell.
    #[display("{} is already taken", _0)]
    CellOccupied(Position),
    /// Cell click while the computer is to move.
    #[display("Not the player's turn")]
    NotPlayersTurn,
    /// Computer move while the player is to move.
    #[display("Not the computer's turn")]
    NotComputersTurn,
    /// Cell index outside 0-8.
    #[display("No cell at index {}", _0)]
    OutOfRange(usize),
    /// Computer move scheduled for an earlier round.
    #[display("Stale computer move from round {} (now round {})", ticket, current)]
    StaleTicket {
        /// Round on the ticket.
        ticket: u64,
        /// Round in progress.
        current: u64,
    },
    /// Computer move with no empty cell left.
    #[display("No open cells")]
    NoOpenCells,
    /// The chooser picked a cell that was not open.
    #[display("Chooser picked {}, which is not open", _0)]
    InvalidChoice(Position),
}

/// Result of dispatching one event to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing changed.
    Ignored(Rejection),
    /// State changed; the human moves next.
    AwaitingPlayer,
    /// State changed; the computer moves next once the ticket is redeemed.
    ComputerToMove(MoveTicket),
    /// The round just ended.
    Finished(Outcome),
}

impl Reaction {
    /// Returns true if the event changed the state.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Reaction::Ignored(_))
    }

    /// Returns the ticket if the computer is due to move.
    pub fn ticket(&self) -> Option<MoveTicket> {
        match self {
            Reaction::ComputerToMove(ticket) => Some(*ticket),
            _ => None,
        }
    }
}
