//! History consistency invariant: each record adds exactly one marker.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: record `k` has `k` occupied squares, adds exactly one to
/// record `k - 1`, and that square is the one its position names.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(start) = state.history.first() else {
            return false;
        };
        if start.board().occupied() != 0 || start.position().is_some() {
            return false;
        }

        state.history.windows(2).enumerate().all(|(i, pair)| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(position) = pair[1].position() else {
                return false;
            };
            let placed = position.to_index(after.side());
            let changed: Vec<usize> = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(index, _)| index)
                .collect();

            after.occupied() == i + 1
                && changed == [placed]
                && before.get(placed) == Some(Square::Empty)
        })
    }

    fn description() -> &'static str {
        "Each history record adds exactly one marker at its position"
    }
}
