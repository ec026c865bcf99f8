//! Requests Reducer
//!
//! Counts outstanding books service calls. Every call starts with
//! `RequestStarted` and ends with either `BooksLoaded` (writes reload the
//! collection on success) or `RequestFailed`.

use crate::actions::BooksApiAction;
use crate::state::RequestsState;

pub fn reduce_requests(mut state: RequestsState, action: &BooksApiAction) -> RequestsState {
    match action {
        BooksApiAction::RequestStarted { operation } => {
            state.in_flight += 1;
            log::debug!("{} started ({} in flight)", operation, state.in_flight);
        }
        BooksApiAction::RequestFailed { operation, error } => {
            log::error!("{} failed: {}", operation, error);
            state.last_error = Some(error.clone());
        }
        BooksApiAction::BooksLoaded { .. } => {
            state.last_error = None;
        }
        _ => {}
    }

    if action.completes_request() {
        // Loads may also be dispatched without a tracked request
        state.in_flight = state.in_flight.saturating_sub(1);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::BooksOperation;

    #[test]
    fn test_started_then_loaded_is_idle() {
        let state = reduce_requests(
            RequestsState::default(),
            &BooksApiAction::RequestStarted {
                operation: BooksOperation::Create,
            },
        );
        assert!(!state.is_idle());

        let state = reduce_requests(state, &BooksApiAction::BooksLoaded { books: vec![] });
        assert!(state.is_idle());
    }

    #[test]
    fn test_failure_records_error() {
        let state = reduce_requests(
            RequestsState {
                in_flight: 1,
                last_error: None,
            },
            &BooksApiAction::RequestFailed {
                operation: BooksOperation::Delete,
                error: "boom".into(),
            },
        );
        assert!(state.is_idle());
        assert_eq!(state.last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_untracked_load_does_not_underflow() {
        let state = reduce_requests(
            RequestsState::default(),
            &BooksApiAction::BooksLoaded { books: vec![] },
        );
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_confirmations_keep_request_open() {
        let state = reduce_requests(
            RequestsState {
                in_flight: 1,
                last_error: None,
            },
            &BooksApiAction::BookDeleted {
                book_id: "1".into(),
            },
        );
        assert_eq!(state.in_flight, 1);
    }
}
