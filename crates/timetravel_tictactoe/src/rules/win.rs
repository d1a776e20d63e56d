//! Win detection logic for tic-tac-toe.

use super::lines::{Line, catalog};
use crate::{Board, Marker, Square};
use tracing::instrument;

/// Returns the first catalog line whose cells share one marker.
#[instrument(skip(board), fields(side = board.side()))]
pub fn winning_line(board: &Board) -> Option<Line> {
    catalog(board.side()).into_iter().find(|line| {
        let mut cells = line.cells().iter().map(|&i| board.get(i));
        match cells.next() {
            Some(Some(first @ Square::Occupied(_))) => cells.all(|sq| sq == Some(first)),
            _ => false,
        }
    })
}

/// Returns the marker holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Marker> {
    let line = winning_line(board)?;
    let first = *line.cells().first()?;
    board.get(first).and_then(Square::marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(moves: &[(usize, Marker)]) -> Board {
        let mut board = Board::new();
        for &(index, marker) in moves {
            board.set(index, Square::Occupied(marker)).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Marker::X), (1, Marker::X), (2, Marker::X)]);
        assert_eq!(winning_line(&board), Some(Line::from([0, 1, 2])));
        assert_eq!(winner(&board), Some(Marker::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Marker::O), (4, Marker::O), (6, Marker::O)]);
        assert_eq!(winning_line(&board), Some(Line::from([2, 4, 6])));
        assert_eq!(winner(&board), Some(Marker::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Marker::X), (1, Marker::O), (2, Marker::X)]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let board = board_with(&[(0, Marker::X), (1, Marker::X)]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_catalog_line_wins_ties() {
        // Row 0 and column 0 both complete.
        let board = board_with(&[
            (0, Marker::X),
            (1, Marker::X),
            (2, Marker::X),
            (3, Marker::X),
            (6, Marker::X),
        ]);
        assert_eq!(winning_line(&board), Some(Line::from([0, 1, 2])));
    }

    #[test]
    fn test_four_by_four_needs_four_in_a_row() {
        let mut board = Board::with_side(4).unwrap();
        for index in [0, 1, 2] {
            board.set(index, Square::Occupied(Marker::O)).unwrap();
        }
        assert_eq!(winning_line(&board), None);
        board.set(3, Square::Occupied(Marker::O)).unwrap();
        assert_eq!(winning_line(&board), Some(Line::from(vec![0, 1, 2, 3])));
    }
}
