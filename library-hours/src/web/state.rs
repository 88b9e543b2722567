//! Application state for the web layer.

use crate::board::StatusBoard;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Latest refresh outcome
    pub board: StatusBoard,
}

impl AppState {
    /// Create a new app state.
    pub fn new(board: StatusBoard) -> Self {
        Self { board }
    }
}
