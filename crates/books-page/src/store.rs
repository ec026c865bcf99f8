use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Store - holds application state and manages the Redux loop
///
/// The store is single-writer: actions are reduced one at a time on the
/// thread that owns it. Actions queued through the `Dispatcher` (e.g. by
/// completed service calls) are picked up by `dispatch` and `process_next`.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<Subscriber>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            subscribers: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Register a subscriber, called with the new state after every reduced action
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action, then everything already queued behind it
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        self.process(action.into());
        self.drain_pending();
    }

    /// Wait up to `timeout` for a queued action and process it
    ///
    /// Returns `false` if nothing arrived in time.
    pub fn process_next(&mut self, timeout: Duration) -> bool {
        match self.action_rx.recv_timeout(timeout) {
            Ok(action) => {
                self.process(action);
                self.drain_pending();
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                log::error!("Action channel disconnected");
                false
            }
        }
    }

    fn drain_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    /// Run one action through the middleware chain and reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, &action);

            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{BooksApiAction, BooksPageAction};
    use book_models::Book;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Consumes every SelectBook action
    struct BlockSelection;

    impl Middleware for BlockSelection {
        fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            !matches!(action, Action::BooksPage(BooksPageAction::SelectBook { .. }))
        }
    }

    /// Answers Enter with a load, like a service would
    struct LoadOnEnter;

    impl Middleware for LoadOnEnter {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            if matches!(action, Action::BooksPage(BooksPageAction::Enter)) {
                dispatcher.dispatch(BooksApiAction::BooksLoaded {
                    books: vec![Book::new("1", "A", 1.0)],
                });
            }
            true
        }
    }

    #[test]
    fn test_dispatch_reduces_and_notifies() {
        let mut store = Store::new(AppState::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.books.active_book_id.clone()));

        store.dispatch(BooksPageAction::SelectBook {
            book_id: "1".into(),
        });
        store.dispatch(BooksPageAction::ClearSelectedBook);

        assert_eq!(*seen.borrow(), vec![Some("1".to_string()), None]);
    }

    #[test]
    fn test_consumed_action_is_not_reduced() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(BlockSelection));
        let notified = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&notified);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch(BooksPageAction::SelectBook {
            book_id: "1".into(),
        });

        assert_eq!(store.state().books.active_book_id, None);
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn test_actions_from_middleware_are_processed_in_same_dispatch() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(LoadOnEnter));

        store.dispatch(BooksPageAction::Enter);

        assert_eq!(store.state().books.collection.len(), 1);
    }

    #[test]
    fn test_process_next_picks_up_queued_actions() {
        let mut store = Store::new(AppState::default());
        let dispatcher = store.dispatcher().clone();

        assert!(!store.process_next(Duration::from_millis(10)));

        std::thread::spawn(move || {
            dispatcher.dispatch(BooksApiAction::BooksLoaded {
                books: vec![Book::new("1", "A", 1.0), Book::new("2", "B", 2.0)],
            });
        });

        assert!(store.process_next(Duration::from_secs(5)));
        assert_eq!(store.state().books.collection.len(), 2);
    }
}
