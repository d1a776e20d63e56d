//! Descriptors a view needs to render the game: status text and move list.

use crate::{GameState, Marker, Phase, Position, SortOrder};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Status {
    /// The viewed record is decided.
    #[display("Winner: {}", _0)]
    Winner(Marker),
    /// Play continues with this marker.
    #[display("Next player: {}", _0)]
    NextPlayer(Marker),
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MoveDescriptor {
    /// History index this entry jumps to.
    pub index: usize,
    /// Where the move was played. `None` for the start.
    pub position: Option<Position>,
    /// Whether this is the viewed record.
    pub is_current: bool,
}

impl MoveDescriptor {
    /// Button label, with or without the move's coordinates.
    pub fn label(&self, with_position: bool) -> String {
        match (self.index, self.position) {
            (0, _) => "Go to start".to_string(),
            (i, Some(pos)) if with_position => format!("Go to Move #{} {}", i, pos),
            (i, _) => format!("Go to Move #{}", i),
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(true))
    }
}

impl GameState {
    /// Status of the viewed record.
    pub fn status(&self) -> Status {
        match self.phase() {
            Phase::Decided(marker) => Status::Winner(marker),
            Phase::InProgress => Status::NextPlayer(self.next_player()),
        }
    }

    /// Move list in display order.
    #[instrument(skip(self), fields(sort_order = ?self.sort_order()))]
    pub fn move_list(&self) -> Vec<MoveDescriptor> {
        let mut moves: Vec<MoveDescriptor> = self
            .history()
            .iter()
            .enumerate()
            .map(|(i, record)| MoveDescriptor::new(i, *record.position(), i == self.current_move()))
            .collect();
        if self.sort_order() == SortOrder::Descending {
            moves.reverse();
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let state = GameState::new();
        assert_eq!(state.status().to_string(), "Next player: X");
        assert_eq!(state.click(4).status().to_string(), "Next player: O");
    }

    #[test]
    fn test_labels() {
        let state = GameState::new().click(0).click(5);
        let labels: Vec<String> = state.move_list().iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            ["Go to start", "Go to Move #1 (1, 1)", "Go to Move #2 (2, 3)"]
        );
        assert_eq!(state.move_list()[2].label(false), "Go to Move #2");
    }

    #[test]
    fn test_descending_reverses() {
        let state = GameState::new().click(0).click(1).toggle_sort_order();
        let indices: Vec<usize> = state.move_list().iter().map(|m| m.index).collect();
        assert_eq!(indices, [2, 1, 0]);
    }

    #[test]
    fn test_current_flag_follows_navigation() {
        let state = GameState::new().click(0).click(1).move_to(1);
        let current: Vec<usize> = state
            .move_list()
            .iter()
            .filter(|m| m.is_current)
            .map(|m| m.index)
            .collect();
        assert_eq!(current, [1]);
    }
}
