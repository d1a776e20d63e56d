//! Viewed-move invariant: the cursor points into history.

use super::Invariant;
use crate::GameState;

/// Invariant: history is non-empty and `current_move` indexes into it.
pub struct CurrentMoveInBoundsInvariant;

impl Invariant<GameState> for CurrentMoveInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_move < state.history.len()
    }

    fn description() -> &'static str {
        "Current move indexes into a non-empty history"
    }
}
