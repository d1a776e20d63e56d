//! Actions accepted by the reducer.

use serde::{Deserialize, Serialize};

/// A user intent, dispatched through [`GameState::reduce`](crate::GameState::reduce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the next marker on a cell.
    #[display("click cell {}", _0)]
    Click(usize),
    /// Jump to a history entry.
    #[display("move to #{}", _0)]
    MoveTo(usize),
    /// Reverse the displayed move list.
    #[display("toggle sort order")]
    ToggleSortOrder,
}
