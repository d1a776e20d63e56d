//! Alternating turn invariant: X plays odd records, O even ones.

use super::Invariant;
use crate::{GameState, Marker};

/// Invariant: `next_player` matches the parity of `current_move`, and the
/// marker placed in record `k` belongs to the player due at move `k - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        if state.next_player != Marker::to_move_at(state.current_move) {
            return false;
        }

        state.history.iter().enumerate().skip(1).all(|(k, record)| {
            record
                .position()
                .and_then(|pos| record.board().get(pos.to_index(record.board().side())))
                .and_then(|square| square.marker())
                == Some(Marker::to_move_at(k - 1))
        })
    }

    fn description() -> &'static str {
        "Next player follows move parity and markers alternate"
    }
}
