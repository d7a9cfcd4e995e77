//! Headless play: a random human against the random computer.

use anyhow::{Result, bail};
use oxo_core::{GameController, MoveChooser, RandomChooser, Reaction, Symbol, Tally};
use tracing::{debug, info, instrument};

/// Plays `rounds` rounds with the human on `symbol` and returns the tally.
///
/// Both sides draw from the same seed when one is given, so a seeded run
/// is reproducible.
#[instrument]
pub fn simulate(rounds: u32, symbol: Symbol, seed: Option<u64>) -> Result<Tally> {
    let (mut game, mut human) = match seed {
        Some(seed) => (
            GameController::seeded(seed),
            RandomChooser::seeded(seed.wrapping_add(1)),
        ),
        None => (GameController::with_random(), RandomChooser::new()),
    };

    let mut reaction = game.choose_symbol(symbol);
    for round in 0..rounds {
        if round > 0 {
            reaction = game.restart();
        }
        reaction = play_round(&mut game, &mut human, reaction)?;
        debug!(round, ?reaction, "Round played");
    }

    info!(tally = %game.tally(), "Simulation finished");
    Ok(*game.tally())
}

fn play_round(
    game: &mut GameController,
    human: &mut impl MoveChooser,
    mut reaction: Reaction,
) -> Result<Reaction> {
    loop {
        reaction = game.resolve_computer_turns(reaction);
        match reaction {
            Reaction::Finished(_) => return Ok(reaction),
            Reaction::AwaitingPlayer => {
                let open = game.state().board().empty_positions();
                let Some(pos) = human.choose(&open) else {
                    bail!("No open cell for the human on an unfinished board");
                };
                reaction = game.select_cell(pos);
            }
            Reaction::Ignored(rejection) => bail!("Simulated move rejected: {rejection}"),
            Reaction::ComputerToMove(ticket) => reaction = game.play_computer_move(ticket),
        }
    }
}
