//! Computer move selection.

use super::Position;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Picks one of the open cells for the computer.
///
/// The transition functions only ever pass the cells that are empty at
/// the moment the move is played.
pub trait MoveChooser {
    /// Chooses a position from `open`. Returns `None` only if `open` is empty.
    fn choose(&mut self, open: &[Position]) -> Option<Position>;
}

/// Uniformly random choice among the open cells.
#[derive(Debug, Clone)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    /// Creates a chooser seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible chooser.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for RandomChooser {
    fn choose(&mut self, open: &[Position]) -> Option<Position> {
        let choice = open.choose(&mut self.rng).copied();
        debug!(open = open.len(), ?choice, "Random choice");
        choice
    }
}

/// Plays a fixed script of positions.
///
/// Scripted positions that are no longer open are skipped. Once the
/// script runs out the first open cell is taken.
#[derive(Debug, Clone, Default)]
pub struct SequenceChooser {
    script: VecDeque<Position>,
}

impl SequenceChooser {
    /// Creates a chooser that plays `script` in order.
    pub fn new(script: impl IntoIterator<Item = Position>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Positions not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MoveChooser for SequenceChooser {
    fn choose(&mut self, open: &[Position]) -> Option<Position> {
        while let Some(next) = self.script.pop_front() {
            if open.contains(&next) {
                return Some(next);
            }
            debug!(skipped = %next, "Scripted position not open");
        }
        open.first().copied()
    }
}
