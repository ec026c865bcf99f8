use crate::actions::Action;
use crate::reducers::{books_reducer, requests_reducer, status_bar_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each action to the slices it affects
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::BooksPage(action) => {
            state.books = books_reducer::reduce_books_page(state.books, action);
        }
        Action::BooksApi(action) => {
            state.books = books_reducer::reduce_books_api(state.books, action);
            state.requests = requests_reducer::reduce_requests(state.requests, action);
        }
        Action::StatusBar(action) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, action);
        }
    }
    state
}
