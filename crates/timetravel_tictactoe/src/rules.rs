//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. The line catalog is kept apart
//! from detection so the same catalog drives highlighting in the view.

pub mod lines;
pub mod win;

pub use lines::{CLASSIC_LINES, Line, catalog};
pub use win::{winner, winning_line};
