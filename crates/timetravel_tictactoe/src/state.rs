//! Game state and the pure reducer over it.
//!
//! Every transition takes `&GameState` and returns a fresh state; an
//! ignored action returns an equal copy.

use crate::action::Action;
use crate::record::MoveRecord;
use crate::rules;
use crate::{Board, BoardError, Marker, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Order in which the move list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Observable phase of the viewed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No winning line yet.
    InProgress,
    /// A line is complete.
    Decided(Marker),
}

/// Complete game state: history, viewed move, turn and display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) current_move: usize,
    pub(crate) next_player: Marker,
    pub(crate) sort_order: SortOrder,
}

impl GameState {
    /// Creates a 3x3 game with a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a game on a `side`-wide board.
    #[instrument]
    pub fn with_side(side: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::with_side(side)?))
    }

    fn from_board(board: Board) -> Self {
        Self {
            history: vec![MoveRecord::start(board)],
            current_move: 0,
            next_player: Marker::X,
            sort_order: SortOrder::default(),
        }
    }

    /// All move records, index 0 being the empty board.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the viewed move record.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Marker that plays next from the viewed record.
    pub fn next_player(&self) -> Marker {
        self.next_player
    }

    /// Display order of the move list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The viewed move record.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.current_move]
    }

    /// Board of the viewed move record.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Cells per row.
    pub fn side(&self) -> usize {
        self.board().side()
    }

    /// Phase of the viewed move record.
    pub fn phase(&self) -> Phase {
        match self.current().winner() {
            Some(marker) => Phase::Decided(marker),
            None => Phase::InProgress,
        }
    }

    /// Whether the viewed move record has a winning line.
    pub fn is_decided(&self) -> bool {
        self.current().is_decided()
    }

    /// Cells to highlight: the winning line of the viewed record.
    pub fn highlighted_cells(&self) -> &[usize] {
        self.current()
            .winning_line()
            .as_ref()
            .map(|line| line.cells())
            .unwrap_or_default()
    }

    /// Applies an action.
    pub fn reduce(&self, action: Action) -> Self {
        match action {
            Action::Click(cell) => self.click(cell),
            Action::MoveTo(target) => self.move_to(target),
            Action::ToggleSortOrder => self.toggle_sort_order(),
        }
    }

    /// Places the next marker on `cell`, branching history from the viewed move.
    ///
    /// Ignored when the viewed record is decided or the cell is taken or
    /// off the board.
    #[instrument(skip(self), fields(current_move = self.current_move, next_player = %self.next_player))]
    pub fn click(&self, cell: usize) -> Self {
        let current = self.current();
        if let Some(line) = current.winning_line() {
            debug!(%line, "Game already decided, ignoring click");
            return self.clone();
        }

        let board = match current.board().placed(cell, self.next_player) {
            Ok(board) => board,
            Err(e) => {
                debug!(error = %e, "Ignoring click");
                return self.clone();
            }
        };

        let position = Position::from_index(cell, board.side());
        let winning_line = rules::winning_line(&board);
        if let Some(line) = &winning_line {
            info!(winner = %self.next_player, %line, "Game decided");
        }

        let mut history = self.history[..=self.current_move].to_vec();
        history.push(MoveRecord::new(board, Some(position), winning_line));
        let current_move = history.len() - 1;
        debug!(current_move, %position, "Move recorded");

        Self {
            history,
            current_move,
            next_player: self.next_player.opponent(),
            sort_order: self.sort_order,
        }
    }

    /// Views history entry `target`; the turn follows its parity.
    ///
    /// A target past the end of history leaves the state unchanged.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn move_to(&self, target: usize) -> Self {
        if target >= self.history.len() {
            warn!("Move target outside history, ignoring");
            return self.clone();
        }
        Self {
            current_move: target,
            next_player: Marker::to_move_at(target),
            ..self.clone()
        }
    }

    /// Flips the move list display order.
    #[instrument(skip(self), fields(sort_order = ?self.sort_order))]
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            sort_order: self.sort_order.toggle(),
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
