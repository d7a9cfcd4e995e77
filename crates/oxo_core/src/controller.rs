//! Game controller: the single owner of game state.

use crate::action::{MoveTicket, Reaction};
use crate::chooser::{MoveChooser, RandomChooser};
use crate::invariants;
use crate::transition::{self, Event, Transition};
use crate::{GameState, Position, Status, Symbol, Tally};
use tracing::{debug, info, instrument, warn};

/// Owns the game state, the computer's move chooser and the session tally.
///
/// Every change goes through [`GameController::dispatch`]. The controller
/// never sleeps or spawns: when the computer is due to move it returns a
/// [`MoveTicket`] and the caller redeems it with
/// [`GameController::play_computer_move`] whenever it likes.
pub struct GameController {
    state: GameState,
    chooser: Box<dyn MoveChooser + Send>,
    tally: Tally,
}

impl GameController {
    /// Creates a controller in the selecting phase.
    pub fn new(chooser: impl MoveChooser + Send + 'static) -> Self {
        Self {
            state: GameState::new(),
            chooser: Box::new(chooser),
            tally: Tally::new(),
        }
    }

    /// Creates a controller whose computer moves uniformly at random.
    pub fn with_random() -> Self {
        Self::new(RandomChooser::new())
    }

    /// Creates a controller with a reproducible random computer.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomChooser::seeded(seed))
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session tally.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Returns the status display.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Applies an event and returns its reaction.
    ///
    /// Ignored events leave the state untouched. A finished round is
    /// added to the tally.
    #[instrument(skip(self), fields(round = self.state.round()))]
    pub fn dispatch(&mut self, event: Event) -> Reaction {
        let Transition { state, reaction } =
            transition::apply(&self.state, event, self.chooser.as_mut());

        if let Reaction::Ignored(rejection) = reaction {
            debug!(%rejection, "No-op");
            return reaction;
        }

        self.state = state;
        self.check_invariants();

        match reaction {
            Reaction::Finished(outcome) => {
                if let Some(player) = self.state.player_symbol() {
                    self.tally.record(outcome, player);
                }
                info!(%outcome, tally = %self.tally, "Round finished");
            }
            Reaction::ComputerToMove(ticket) => debug!(%ticket, "Computer to move"),
            _ => debug!(status = %self.status(), "State updated"),
        }

        reaction
    }

    /// Picks the human's symbol and starts the first round.
    pub fn choose_symbol(&mut self, symbol: Symbol) -> Reaction {
        self.dispatch(Event::ChooseSymbol(symbol))
    }

    /// Clicks a cell.
    pub fn select_cell(&mut self, pos: Position) -> Reaction {
        self.dispatch(Event::SelectCell(pos))
    }

    /// Clicks a cell by raw index; indices outside 0-8 are ignored.
    pub fn select_index(&mut self, index: usize) -> Reaction {
        match Position::from_index(index) {
            Some(pos) => self.select_cell(pos),
            None => {
                let rejection = crate::Rejection::OutOfRange(index);
                debug!(%rejection, "No-op");
                Reaction::Ignored(rejection)
            }
        }
    }

    /// Plays the computer's move for `ticket` against the current board.
    pub fn play_computer_move(&mut self, ticket: MoveTicket) -> Reaction {
        self.dispatch(Event::ComputerMove(ticket))
    }

    /// Clears the board for a new round with the same symbols.
    pub fn restart(&mut self) -> Reaction {
        self.dispatch(Event::Restart)
    }

    /// Redeems computer tickets immediately until the human is to move or
    /// the round ends.
    ///
    /// For headless play and tests, where no thinking delay is wanted.
    pub fn resolve_computer_turns(&mut self, mut reaction: Reaction) -> Reaction {
        while let Reaction::ComputerToMove(ticket) = reaction {
            reaction = self.play_computer_move(ticket);
        }
        reaction
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = invariants::check(&self.state)
        {
            for violation in &violations {
                warn!(%violation, "Game invariant violated");
            }
            panic!("game invariants violated: {violations:?}");
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::with_random()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("tally", &self.tally)
            .finish_non_exhaustive()
    }
}
