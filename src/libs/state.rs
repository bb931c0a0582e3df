//! UI state machine for the history screen.
//!
//! Exactly one variant is active at a time, and the variants carry their
//! own data, so a renderer cannot observe a half-updated combination like
//! an error message alongside stale records. The one structural rule lives
//! in [`UiState::success`]: a successful result with zero records is
//! [`UiState::Empty`], never an empty success.

use crate::libs::record::AttendanceRecord;

/// What the history screen should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    /// A fetch is in flight. `is_refresh` tells pull-to-refresh spinners
    /// apart from the initial full-screen loader.
    Loading { is_refresh: bool },
    /// Records to show, in server order. Never empty.
    Success { records: Vec<AttendanceRecord> },
    /// The query succeeded and matched nothing.
    Empty,
    /// The query failed; `message` is ready to display as-is.
    Error { message: String },
}

impl UiState {
    /// Initial load in flight.
    pub fn loading() -> Self {
        UiState::Loading { is_refresh: false }
    }

    /// Refresh of already-presented data in flight.
    pub fn refreshing() -> Self {
        UiState::Loading { is_refresh: true }
    }

    /// Successful result; an empty list folds into [`UiState::Empty`].
    pub fn success(records: Vec<AttendanceRecord>) -> Self {
        if records.is_empty() {
            UiState::Empty
        } else {
            UiState::Success { records }
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        UiState::Error { message: message.into() }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self, UiState::Loading { is_refresh: true })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UiState::Success { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, UiState::Empty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UiState::Error { .. })
    }

    /// Records to render; empty outside of `Success`.
    pub fn records(&self) -> &[AttendanceRecord] {
        match self {
            UiState::Success { records } => records,
            _ => &[],
        }
    }

    /// Error text to render, when in `Error`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error { message } => Some(message),
            _ => None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        UiState::loading()
    }
}
