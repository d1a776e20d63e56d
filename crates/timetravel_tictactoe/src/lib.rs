//! Time-travel tic-tac-toe - pure game logic.
//!
//! A game is a [`GameState`]: an append-only history of [`MoveRecord`]s,
//! the index of the viewed record, the marker to move next and the order
//! the move list is displayed in. Transitions are pure functions returning
//! a new state; [`Store`] owns the live state and tells subscribers when it
//! changes.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{Action, GameState, Store};
//!
//! let mut store = Store::new(GameState::new());
//! for cell in [0, 1, 3, 4, 6] {
//!     store.dispatch(Action::Click(cell));
//! }
//! assert_eq!(store.state().status().to_string(), "Winner: X");
//!
//! // Travel back and branch.
//! store.dispatch(Action::MoveTo(2));
//! store.dispatch(Action::Click(8));
//! assert_eq!(store.state().history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
mod presentation;
mod record;
pub mod rules;
mod state;
mod store;
mod types;

pub use action::Action;
pub use position::Position;
pub use presentation::{MoveDescriptor, Status};
pub use record::MoveRecord;
pub use rules::{Line, winner, winning_line};
pub use state::{GameState, Phase, SortOrder};
pub use store::{Store, Subscriber};
pub use types::{Board, BoardError, BoardErrorKind, DEFAULT_SIDE, Marker, Square};
