//! Board and square rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{Board, Marker, Square};

use super::{HitMap, Target};

/// Terminal columns per cell, borders included.
pub const CELL_WIDTH: u16 = 7;

/// Terminal rows per cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Renders `board` as `side` rows of `side` cells centered in `area`.
///
/// Cells are clipped to `area`; cells that fall outside it get no region.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    highlighted: &[usize],
    cursor: Option<usize>,
    hits: &mut HitMap,
) {
    let side = board.side() as u16;
    let board_area = center_rect(area, side * CELL_WIDTH, side * CELL_HEIGHT);
    let numbered = board.len() <= 9;

    for (index, square) in board.squares().iter().enumerate() {
        let (row, col) = (index as u16 / side, index as u16 % side);
        let cell = Rect::new(
            board_area.x + col * CELL_WIDTH,
            board_area.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area);
        if cell.is_empty() {
            continue;
        }

        draw_square(
            frame,
            cell,
            index,
            *square,
            numbered,
            highlighted.contains(&index),
            cursor == Some(index),
        );
        hits.push(cell, Target::Cell(index));
    }
}

fn draw_square(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    square: Square,
    numbered: bool,
    winning: bool,
    under_cursor: bool,
) {
    let label = match square {
        Square::Empty if numbered => (index + 1).to_string(),
        Square::Empty => String::new(),
        Square::Occupied(marker) => marker.to_string(),
    };

    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Marker::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Marker::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    // The winning background stays visible under the cursor.
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
        if under_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
    }

    let border = if winning {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
