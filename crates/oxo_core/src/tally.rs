//! Running score for a session.

use super::{Outcome, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Rounds won, lost and drawn by the human this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds the human won.
    wins: u32,
    /// Rounds the computer won.
    losses: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished round from the point of view of `player`.
    pub fn record(&mut self, outcome: Outcome, player: Symbol) {
        match outcome {
            Outcome::Winner(symbol) if symbol == player => self.wins += 1,
            Outcome::Winner(_) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total rounds recorded.
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Won {} | Lost {} | Drawn {}",
            self.wins, self.losses, self.draws
        )
    }
}
