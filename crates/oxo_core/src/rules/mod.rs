//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from state storage so the transition functions and the invariant
//! checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner, winning_line};
