//! Application state
//!
//! `AppState` is replaced on every reduced action; slices that did not
//! change keep their shared data so selectors can detect it cheaply.

mod books;
mod requests;
mod status_bar;

pub use books::BooksState;
pub use requests::RequestsState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};

/// Root state of the books page
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Book collection and active selection
    pub books: BooksState,
    /// Outstanding books service calls
    pub requests: RequestsState,
    /// User feedback history
    pub status_bar: StatusBarState,
}

impl AppState {
    /// Initial state keeping at most `max_history` status messages
    pub fn with_status_history(max_history: usize) -> Self {
        Self {
            status_bar: StatusBarState::with_max_history(max_history),
            ..Default::default()
        }
    }
}
