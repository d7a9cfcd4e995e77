//! Pure state transitions.
//!
//! Each event maps `(state, event)` to a new state plus a [`Reaction`].
//! The input state is never modified; an ignored event hands back an
//! unchanged copy. The only outside influence is the [`MoveChooser`]
//! consulted for computer moves.

use crate::action::{Move, MoveTicket, Outcome, Reaction, Rejection};
use crate::chooser::MoveChooser;
use crate::rules::{check_winner, is_full};
use crate::{Board, GameState, Phase, Position, Symbol};
use tracing::{debug, instrument};

/// Input to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The human picked a symbol.
    ChooseSymbol(Symbol),
    /// The human clicked a cell.
    SelectCell(Position),
    /// A scheduled computer move came due.
    ComputerMove(MoveTicket),
    /// The human asked for a new round.
    Restart,
}

/// A new state and what happened to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the event.
    pub state: GameState,
    /// Summary of the event's effect.
    pub reaction: Reaction,
}

/// Applies one event.
#[instrument(skip(state, chooser), fields(phase = ?state.phase, round = state.round))]
pub fn apply(state: &GameState, event: Event, chooser: &mut dyn MoveChooser) -> Transition {
    let result = match event {
        Event::ChooseSymbol(symbol) => choose_symbol(state, symbol),
        Event::SelectCell(pos) => select_cell(state, pos),
        Event::ComputerMove(ticket) => computer_move(state, ticket, chooser),
        Event::Restart => Ok(restart(state)),
    };

    match result {
        Ok(transition) => transition,
        Err(rejection) => {
            debug!(%rejection, "Event ignored");
            Transition {
                state: state.clone(),
                reaction: Reaction::Ignored(rejection),
            }
        }
    }
}

/// Assigns symbols and starts the first round. Circle always moves first.
pub fn choose_symbol(state: &GameState, symbol: Symbol) -> Result<Transition, Rejection> {
    if state.phase != Phase::Selecting {
        return Err(Rejection::NotSelecting);
    }

    let mut next = state.clone();
    next.player = Some(symbol);
    next.computer = Some(symbol.opponent());
    next.round += 1;
    begin_round(&mut next);

    let reaction = evaluate(&mut next);
    Ok(Transition {
        state: next,
        reaction,
    })
}

/// Places the human's mark.
///
/// Requires the playing phase, an empty cell and the human's turn, in
/// that order of checking.
pub fn select_cell(state: &GameState, pos: Position) -> Result<Transition, Rejection> {
    let (Phase::Playing, Some(player), Some(computer)) =
        (state.phase, state.player, state.computer)
    else {
        return Err(Rejection::NotPlaying);
    };
    if !state.board.is_empty(pos) {
        return Err(Rejection::CellOccupied(pos));
    }
    if state.turn != Some(player) {
        return Err(Rejection::NotPlayersTurn);
    }

    let mut next = state.clone();
    next.board.place(pos, player);
    next.history.push(Move::new(player, pos));
    next.turn = Some(computer);

    let reaction = evaluate(&mut next);
    Ok(Transition {
        state: next,
        reaction,
    })
}

/// Places the computer's mark on a cell picked from the cells open *now*.
pub fn computer_move(
    state: &GameState,
    ticket: MoveTicket,
    chooser: &mut dyn MoveChooser,
) -> Result<Transition, Rejection> {
    if ticket.round != state.round {
        return Err(Rejection::StaleTicket {
            ticket: ticket.round,
            current: state.round,
        });
    }
    let (Phase::Playing, Some(player), Some(computer)) =
        (state.phase, state.player, state.computer)
    else {
        return Err(Rejection::NotPlaying);
    };
    if state.turn != Some(computer) {
        return Err(Rejection::NotComputersTurn);
    }

    let open = state.board.empty_positions();
    let pos = chooser.choose(&open).ok_or(Rejection::NoOpenCells)?;
    if !open.contains(&pos) {
        return Err(Rejection::InvalidChoice(pos));
    }

    let mut next = state.clone();
    next.board.place(pos, computer);
    next.history.push(Move::new(computer, pos));
    next.turn = Some(player);

    let reaction = evaluate(&mut next);
    Ok(Transition {
        state: next,
        reaction,
    })
}

/// Clears the board and starts a new round with the same symbols.
///
/// Without assigned symbols the state falls back to the selecting phase.
/// Restart is only offered once symbols are chosen, so that branch is a
/// safety net and never part of normal play.
pub fn restart(state: &GameState) -> Transition {
    let mut next = state.clone();
    next.board = Board::new();
    next.winner = None;
    next.history.clear();
    next.round += 1;

    if next.player.is_some() {
        begin_round(&mut next);
        let reaction = evaluate(&mut next);
        Transition {
            state: next,
            reaction,
        }
    } else {
        next.phase = Phase::Selecting;
        next.player = None;
        next.computer = None;
        next.turn = None;
        Transition {
            state: next,
            reaction: Reaction::AwaitingPlayer,
        }
    }
}

fn begin_round(state: &mut GameState) {
    state.phase = Phase::Playing;
    state.turn = Some(Symbol::Circle);
}

/// Resolves the round after a mutation: win, then draw, then whose turn.
pub fn evaluate(state: &mut GameState) -> Reaction {
    if state.phase != Phase::Playing {
        return Reaction::AwaitingPlayer;
    }

    if let Some(winner) = check_winner(&state.board) {
        state.winner = Some(winner);
        state.phase = Phase::Win;
        return Reaction::Finished(Outcome::Winner(winner));
    }

    if is_full(&state.board) {
        state.phase = Phase::Draw;
        return Reaction::Finished(Outcome::Draw);
    }

    if state.turn.is_some() && state.turn == state.computer {
        Reaction::ComputerToMove(MoveTicket { round: state.round })
    } else {
        Reaction::AwaitingPlayer
    }
}
