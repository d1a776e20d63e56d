//! Game shell: owns the store, maps input to actions and re-renders.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Frame, Terminal, backend::Backend};
use timetravel_tictactoe::{Action, BoardError, GameState, Phase, Store};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::config::TuiConfig;
use crate::input::{digit_cell, move_cursor};
use crate::ui::{self, Focus, HitMap, Target, View, ViewOptions};

/// Notification forwarded from the store to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The game state changed.
    StateChanged {
        /// Viewed history index.
        current_move: usize,
        /// Phase of the viewed record.
        phase: Phase,
    },
}

/// What the event loop should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellTransition {
    /// Keep running.
    Stay,
    /// Exit cleanly.
    Quit,
}

/// The single game screen.
#[derive(Debug)]
pub struct GameShell {
    store: Store,
    options: ViewOptions,
    cursor: usize,
    selected: usize,
    focus: Focus,
    hit_map: HitMap,
    events: mpsc::UnboundedReceiver<ShellEvent>,
    dirty: bool,
}

impl GameShell {
    /// Creates a shell with a fresh game sized by `config`.
    #[instrument(skip(config), fields(board_side = config.board_side()))]
    pub fn new(config: &TuiConfig) -> Result<Self, BoardError> {
        let mut store = Store::new(GameState::with_side(*config.board_side())?);

        let (tx, events) = mpsc::unbounded_channel();
        store.subscribe(move |state: &GameState| {
            let event = ShellEvent::StateChanged {
                current_move: state.current_move(),
                phase: state.phase(),
            };
            if tx.send(event).is_err() {
                warn!("Shell event channel closed");
            }
        });

        Ok(Self {
            store,
            options: ViewOptions {
                highlight_winning_line: *config.highlight_winning_line(),
                show_positions: *config.show_positions(),
            },
            cursor: 0,
            selected: 0,
            focus: Focus::default(),
            hit_map: HitMap::default(),
            events,
            dirty: true,
        })
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// Board cursor cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Clickable regions from the last render.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Whether a redraw is pending.
    pub fn needs_render(&self) -> bool {
        self.dirty
    }

    /// Renders the screen and records its clickable regions.
    pub fn render(&mut self, frame: &mut Frame) {
        let view = View {
            state: self.store.state(),
            options: self.options,
            cursor: self.cursor,
            selected: self.selected,
            focus: self.focus,
        };
        self.hit_map = ui::draw(frame, &view);
        self.dirty = false;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> ShellTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return ShellTransition::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.dirty = true;
            }
            KeyCode::Char('s') => self.dispatch(Action::ToggleSortOrder),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(cell) = digit_cell(c, self.state().board().len()) {
                    self.cursor = cell;
                    self.dirty = true;
                    self.dispatch(Action::Click(cell));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.navigate(code)
            }
            _ => {}
        }
        ShellTransition::Stay
    }

    /// Handles a mouse event; only left-button presses act.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> ShellTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ShellTransition::Stay;
        }
        match self.hit_map.target_at(mouse.column, mouse.row) {
            Some(Target::Cell(cell)) => {
                self.cursor = cell;
                self.focus = Focus::Board;
                self.dirty = true;
                self.dispatch(Action::Click(cell));
            }
            Some(Target::Move(index)) => {
                self.focus = Focus::Moves;
                self.dirty = true;
                self.dispatch(Action::MoveTo(index));
            }
            Some(Target::SortToggle) => self.dispatch(Action::ToggleSortOrder),
            None => {}
        }
        ShellTransition::Stay
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip_all)]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game loop");

        loop {
            self.drain_events();
            if self.dirty {
                terminal.draw(|f| self.render(f))?;
            }

            if event::poll(Duration::from_millis(100))? {
                let transition = match event::read()? {
                    // Crossterm reports releases too on some platforms.
                    Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(..) => {
                        self.dirty = true;
                        ShellTransition::Stay
                    }
                    _ => ShellTransition::Stay,
                };
                if transition == ShellTransition::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    fn dispatch(&mut self, action: Action) {
        if self.store.dispatch(action) {
            self.drain_events();
        }
    }

    /// Consumes store notifications; the move-list selection follows the
    /// viewed move.
    fn drain_events(&mut self) {
        while let Ok(ShellEvent::StateChanged {
            current_move,
            phase,
        }) = self.events.try_recv()
        {
            debug!(current_move, ?phase, "Store notified state change");
            self.selected = self
                .state()
                .move_list()
                .iter()
                .position(|entry| entry.is_current)
                .unwrap_or_default();
            self.dirty = true;
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Board => self.dispatch(Action::Click(self.cursor)),
            Focus::Moves => {
                if let Some(entry) = self.state().move_list().get(self.selected) {
                    let index = entry.index;
                    self.dispatch(Action::MoveTo(index));
                }
            }
        }
    }

    fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => {
                self.cursor = move_cursor(self.cursor, self.state().side(), key);
            }
            Focus::Moves => {
                let last = self.state().history().len() - 1;
                self.selected = match key {
                    KeyCode::Up => self.selected.saturating_sub(1),
                    KeyCode::Down => (self.selected + 1).min(last),
                    _ => self.selected,
                };
            }
        }
        self.dirty = true;
    }
}
