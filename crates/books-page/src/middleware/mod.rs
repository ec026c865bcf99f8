use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod books_middleware;
pub mod logging;

pub use books_middleware::BooksMiddleware;
pub use logging::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the store's thread and must not block it: long
/// running work (service calls) is spawned and reports back through the
/// dispatcher.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
