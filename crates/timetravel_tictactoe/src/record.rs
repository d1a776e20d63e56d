//! Move records: one history entry per board snapshot.

use crate::rules::Line;
use crate::{Board, Marker, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A board snapshot plus what is derived from the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveRecord {
    /// Board after the move.
    board: Board,
    /// Where the move was played. `None` for the initial empty board.
    position: Option<Position>,
    /// Line completed by this move, if it decided the game.
    winning_line: Option<Line>,
}

impl MoveRecord {
    /// Record for the empty starting board.
    pub fn start(board: Board) -> Self {
        Self {
            board,
            position: None,
            winning_line: None,
        }
    }

    /// Whether this snapshot has a winning line.
    pub fn is_decided(&self) -> bool {
        self.winning_line.is_some()
    }

    /// Marker that completed the winning line.
    pub fn winner(&self) -> Option<Marker> {
        let line = self.winning_line.as_ref()?;
        let first = *line.cells().first()?;
        self.board.get(first).and_then(Square::marker)
    }
}

#[cfg(test)]
impl MoveRecord {
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
