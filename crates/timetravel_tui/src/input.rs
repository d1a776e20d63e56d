//! Key mapping for board navigation.

use crossterm::event::KeyCode;

/// Moves a cell cursor on a `side`-wide board; edges stop movement.
pub fn move_cursor(cursor: usize, side: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / side, cursor % side);
    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col + 1 < side => cursor + 1,
        KeyCode::Up if row > 0 => cursor - side,
        KeyCode::Down if row + 1 < side => cursor + side,
        _ => cursor,
    }
}

/// Maps a digit key `1`-`9` to a cell index.
///
/// Only boards of at most nine cells are numbered, so larger boards get `None`.
pub fn digit_cell(c: char, cells: usize) -> Option<usize> {
    if cells > 9 {
        return None;
    }
    let digit = c.to_digit(10)? as usize;
    (1..=cells).contains(&digit).then(|| digit - 1)
}
