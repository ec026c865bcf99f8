use crate::actions::{Action, BooksApiAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Full collections are too noisy for the log
            Action::BooksApi(BooksApiAction::BooksLoaded { books }) => {
                log::debug!("Action: BooksApi(BooksLoaded {{ {} books }})", books.len());
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
