//! Stateless rendering of the game screen.
//!
//! [`draw`] renders a [`View`] and returns a [`HitMap`] so mouse clicks
//! can be mapped back to cells, move-list rows and the sort toggle.

mod board;
mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{GameState, Status};

/// Presentation switches from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Draw the winning line highlighted.
    pub highlight_winning_line: bool,
    /// Include `(row, col)` in move labels.
    pub show_positions: bool,
}

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board cursor moves.
    #[default]
    Board,
    /// The move-list selection moves.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Everything a frame needs.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Game state to render.
    pub state: &'a GameState,
    /// Presentation switches.
    pub options: ViewOptions,
    /// Board cursor cell.
    pub cursor: usize,
    /// Selected row of the displayed move list.
    pub selected: usize,
    /// Focused panel.
    pub focus: Focus,
}

/// Clickable element of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Board cell by absolute index.
    Cell(usize),
    /// Move-list entry by history index.
    Move(usize),
    /// The sort-order toggle.
    SortToggle,
}

/// Screen regions of clickable elements from the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    /// Records a clickable region.
    pub fn push(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Returns the element under a terminal cell.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let point = ScreenPosition::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, target)| *target)
    }

    /// Returns the region of a target.
    pub fn area_of(&self, target: Target) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, view: &View) -> HitMap {
    let mut hits = HitMap::default();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board and info
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Time-Travel Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let side = view.state.side() as u16;
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(side * board::CELL_WIDTH + 4),
            Constraint::Min(30),
        ])
        .split(chunks[1]);

    let highlighted: &[usize] = if view.options.highlight_winning_line {
        view.state.highlighted_cells()
    } else {
        &[]
    };
    let cursor = (view.focus == Focus::Board).then_some(view.cursor);
    board::draw_board(frame, body[0], view.state.board(), highlighted, cursor, &mut hits);

    draw_info(frame, body[1], view, &mut hits);

    let help = Paragraph::new(
        "click/1-9 play | arrows move | Enter select | Tab focus | s sort | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    hits
}

fn draw_info(frame: &mut Frame, area: Rect, view: &View, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Sort toggle
            Constraint::Min(3),    // Moves
        ])
        .split(area);

    let status = view.state.status();
    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, chunks[0]);

    let toggle = Paragraph::new(format!("Sort: {} (s)", view.state.sort_order().label()))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, chunks[1]);
    hits.push(chunks[1], Target::SortToggle);

    moves::draw_moves(frame, chunks[2], view, hits);
}
