//! Catalog of winning lines.

use derive_more::From;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning lines of the 3x3 board: rows, columns, then diagonals.
pub const CLASSIC_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Ordered cell indices forming one line of the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From)]
pub struct Line(Vec<usize>);

impl Line {
    /// Cell indices in the line.
    pub fn cells(&self) -> &[usize] {
        &self.0
    }

    /// Whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl From<[usize; 3]> for Line {
    fn from(cells: [usize; 3]) -> Self {
        Self(cells.to_vec())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Returns every winning line of a `side`-wide board.
///
/// Order is rows top to bottom, columns left to right, the main diagonal,
/// then the anti-diagonal.
#[instrument]
pub fn catalog(side: usize) -> Vec<Line> {
    if side == 3 {
        return CLASSIC_LINES.iter().copied().map(Line::from).collect();
    }

    let rows = (0..side).map(|r| (0..side).map(|c| r * side + c).collect::<Vec<_>>());
    let cols = (0..side).map(|c| (0..side).map(|r| r * side + c).collect::<Vec<_>>());
    let main = (0..side).map(|i| i * side + i).collect::<Vec<_>>();
    let anti = (0..side).map(|i| i * side + (side - 1 - i)).collect::<Vec<_>>();

    rows.chain(cols)
        .chain([main, anti])
        .map(Line::from)
        .collect()
}
