//! OXO core - circle/cross game logic against a random computer opponent.
//!
//! This crate holds the whole game: the board, line detection, the
//! phase state machine and the computer's move policy. It knows nothing
//! about terminals, timers or async runtimes.
//!
//! # Architecture
//!
//! - **Types**: symbols, cells, the 3x3 board and the game state
//! - **Rules**: win and draw detection over the fixed line order
//! - **Transitions**: pure `(state, event) -> state` functions
//! - **Controller**: owns the state, the move chooser and the session tally
//! - **Invariants**: properties checked after every transition in debug builds
//!
//! # Example
//!
//! ```
//! use oxo_core::{GameController, Phase, Position, SequenceChooser, Symbol};
//!
//! let mut game = GameController::new(SequenceChooser::new([Position::Center]));
//! game.choose_symbol(Symbol::Circle);
//! let reaction = game.select_cell(Position::TopLeft);
//! game.resolve_computer_turns(reaction);
//!
//! assert_eq!(game.state().phase(), Phase::Playing);
//! assert_eq!(game.state().current_turn(), Some(Symbol::Circle));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod chooser;
mod controller;
mod position;
mod tally;
mod types;

pub mod invariants;
pub mod rules;
pub mod transition;

pub use action::{Move, MoveTicket, Outcome, Reaction, Rejection};
pub use chooser::{MoveChooser, RandomChooser, SequenceChooser};
pub use controller::GameController;
pub use position::Position;
pub use tally::Tally;
pub use transition::{Event, Transition};
pub use types::{Board, BoardParseError, Cell, GameState, Phase, Status, Symbol};
