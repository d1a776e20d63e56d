//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::{Focus, HitMap, Target, View};

/// Renders the move list, scrolled to keep the selection visible.
pub fn draw_moves(frame: &mut Frame, area: Rect, view: &View, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Moves")
        .border_style(match view.focus {
            Focus::Moves => Style::default().fg(Color::Cyan),
            Focus::Board => Style::default(),
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let moves = view.state.move_list();
    let visible = inner.height as usize;
    if visible == 0 {
        return;
    }
    let offset = view.selected.saturating_sub(visible - 1);

    let lines: Vec<Line> = moves
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(row, entry)| {
            let marker = if entry.is_current { "> " } else { "  " };
            let mut style = Style::default();
            if entry.is_current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if view.focus == Focus::Moves && row == view.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let row_area = Rect::new(inner.x, inner.y + (row - offset) as u16, inner.width, 1);
            hits.push(row_area, Target::Move(entry.index));

            Line::styled(
                format!("{}{}", marker, entry.label(view.options.show_positions)),
                style,
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
