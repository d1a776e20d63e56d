//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the classic board.
pub const DEFAULT_SIDE: usize = 3;

/// Marker placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Returns the marker due to move once `move_index` moves have been played.
    ///
    /// X moves at even indices, O at odd ones.
    pub fn to_move_at(move_index: usize) -> Self {
        if move_index % 2 == 0 {
            Marker::X
        } else {
            Marker::O
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}

/// What went wrong with a board operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// The square count is zero or not a perfect square.
    #[display("{} squares do not form a square board", _0)]
    NotSquare(usize),
    /// The cell index lies outside the board.
    #[display("cell {} is outside a board of {} cells", index, len)]
    OutOfBounds {
        /// Requested cell.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },
    /// The cell already holds a marker.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// What went wrong.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Square board of `side * side` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty 3x3 board.
    pub fn new() -> Self {
        Self {
            side: DEFAULT_SIDE,
            squares: vec![Square::Empty; DEFAULT_SIDE * DEFAULT_SIDE],
        }
    }

    /// Creates an empty board with `side` cells per row.
    #[instrument]
    pub fn with_side(side: usize) -> Result<Self, BoardError> {
        if side == 0 {
            return Err(BoardError::new(BoardErrorKind::NotSquare(0)));
        }
        Ok(Self {
            side,
            squares: vec![Square::Empty; side * side],
        })
    }

    /// Builds a board from a flat list of squares.
    ///
    /// # Errors
    ///
    /// Fails with [`BoardErrorKind::NotSquare`] unless the length is a
    /// non-zero perfect square.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: Vec<Square>) -> Result<Self, BoardError> {
        let len = squares.len();
        let side = len.isqrt();
        if len == 0 || side * side != len {
            return Err(BoardError::new(BoardErrorKind::NotSquare(len)));
        }
        Ok(Self { side, squares })
    }

    /// Cells per row (and per column).
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given cell index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of squares holding a marker.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Sets the square at the given cell index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let len = self.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or_else(|| BoardError::new(BoardErrorKind::OutOfBounds { index, len }))?;
        *slot = square;
        Ok(())
    }

    /// Returns a copy of this board with `marker` placed on an empty cell.
    ///
    /// # Errors
    ///
    /// Fails when the cell is off the board or already occupied.
    pub fn placed(&self, index: usize, marker: Marker) -> Result<Board, BoardError> {
        match self.get(index) {
            None => Err(BoardError::new(BoardErrorKind::OutOfBounds {
                index,
                len: self.len(),
            })),
            Some(Square::Occupied(_)) => Err(BoardError::new(BoardErrorKind::Occupied(index))),
            Some(Square::Empty) => {
                let mut next = self.clone();
                next.set(index, Square::Occupied(marker))?;
                Ok(next)
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(self.side).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<&str> = cells
                .iter()
                .map(|square| match square {
                    Square::Empty => ".",
                    Square::Occupied(Marker::X) => "X",
                    Square::Occupied(Marker::O) => "O",
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
