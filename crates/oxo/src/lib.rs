//! OXO - circle/cross in the terminal against a random computer.
//!
//! The game logic lives in [`oxo_core`]. This crate adds the front end:
//! settings, logging, the delayed computer scheduler and the terminal UI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod logging;
pub mod scheduler;
pub mod settings;
pub mod simulate;
pub mod tui;

pub use settings::{ConfigError, Settings};
