//! Row/column coordinates of a move.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 1-indexed row and column of a cell.
///
/// Other crates can only build one from a cell index, so `row` and `col`
/// are never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        debug_assert!(row >= 1 && col >= 1, "positions are 1-indexed");
        Self { row, col }
    }

    /// Converts an absolute cell index on a `side`-wide board.
    ///
    /// `row = ceil((index + 1) / side)`, `col = (index + 1) mod side`, with
    /// `side` standing in for a zero remainder.
    #[instrument]
    pub fn from_index(index: usize, side: usize) -> Self {
        let ordinal = index + 1;
        let row = ordinal.div_ceil(side);
        let col = match ordinal % side {
            0 => side,
            rem => rem,
        };
        Self::new(row, col)
    }

    /// Converts back to an absolute cell index.
    pub fn to_index(self, side: usize) -> usize {
        (self.row - 1) * side + (self.col - 1)
    }

    /// Row, starting at 1.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column, starting at 1.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_center() {
        assert_eq!(Position::from_index(0, 3), Position::new(1, 1));
        assert_eq!(Position::from_index(2, 3), Position::new(1, 3));
        assert_eq!(Position::from_index(4, 3), Position::new(2, 2));
        assert_eq!(Position::from_index(8, 3), Position::new(3, 3));
    }

    #[test]
    fn test_round_trip_on_larger_board() {
        for index in 0..16 {
            assert_eq!(Position::from_index(index, 4).to_index(4), index);
        }
    }

    #[test]
    fn test_from_index_is_one_based_on_every_side() {
        for side in 1..=5 {
            for index in 0..side * side {
                let position = Position::from_index(index, side);
                assert!(position.row() >= 1 && position.col() >= 1);
                assert!(position.row() <= side && position.col() <= side);
                assert_eq!(position.to_index(side), index);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }
}
