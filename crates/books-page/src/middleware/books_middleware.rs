//! Books Middleware
//!
//! Performs the books service calls behind the page intents:
//! - Loading the collection on Enter
//! - Creating, updating and deleting books
//!
//! Every call is announced with `RequestStarted` and finishes with exactly
//! one `BooksLoaded` or `RequestFailed`. Writes that succeed clear the
//! selection, confirm the write and then reload the whole collection.

use crate::actions::{Action, BooksApiAction, BooksOperation, BooksPageAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use book_models::{Book, BookRequiredProps};
use books_client::BooksService;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Middleware for all books service operations
pub struct BooksMiddleware {
    /// Runtime the service calls are spawned on
    runtime: Handle,
    service: Arc<dyn BooksService>,
}

impl BooksMiddleware {
    pub fn new(service: Arc<dyn BooksService>, runtime: Handle) -> Self {
        Self { runtime, service }
    }

    fn start(&self, operation: BooksOperation, message: String, dispatcher: &Dispatcher) {
        dispatcher.dispatch(BooksApiAction::RequestStarted { operation });
        dispatcher.dispatch(StatusBarAction::running(message, operation.to_string()));
    }

    fn load_books(&self, dispatcher: &Dispatcher) {
        self.start(BooksOperation::Load, "Loading books".into(), dispatcher);

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            reload(service.as_ref(), &dispatcher).await;
        });
    }

    fn create_book(&self, draft: BookRequiredProps, dispatcher: &Dispatcher) {
        let operation = BooksOperation::Create;
        self.start(operation, format!("Creating {}", draft.name), dispatcher);

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match service.create(&draft).await {
                Ok(book) => {
                    log::info!("BooksMiddleware: created book {} ({})", book.id, book.name);
                    dispatcher.dispatch(BooksPageAction::ClearSelectedBook);
                    dispatcher.dispatch(StatusBarAction::success(
                        format!("Created {}", book.name),
                        operation.to_string(),
                    ));
                    dispatcher.dispatch(BooksApiAction::BookCreated { book });
                    reload(service.as_ref(), &dispatcher).await;
                }
                Err(e) => fail(&dispatcher, operation, e),
            }
        });
    }

    fn update_book(&self, book_id: String, changes: Book, dispatcher: &Dispatcher) {
        let operation = BooksOperation::Update;
        self.start(operation, format!("Saving {}", changes.name), dispatcher);

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match service.update(&book_id, &changes).await {
                Ok(book) => {
                    log::info!("BooksMiddleware: updated book {}", book.id);
                    let name = book.name.as_deref().unwrap_or(&changes.name);
                    dispatcher.dispatch(BooksPageAction::ClearSelectedBook);
                    dispatcher.dispatch(StatusBarAction::success(
                        format!("Saved {}", name),
                        operation.to_string(),
                    ));
                    dispatcher.dispatch(BooksApiAction::BookUpdated { book });
                    reload(service.as_ref(), &dispatcher).await;
                }
                Err(e) => fail(&dispatcher, operation, e),
            }
        });
    }

    fn delete_book(&self, book_id: String, dispatcher: &Dispatcher) {
        let operation = BooksOperation::Delete;
        self.start(operation, format!("Deleting book {}", book_id), dispatcher);

        let service = Arc::clone(&self.service);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match service.delete(&book_id).await {
                Ok(()) => {
                    log::info!("BooksMiddleware: deleted book {}", book_id);
                    dispatcher.dispatch(BooksPageAction::ClearSelectedBook);
                    dispatcher.dispatch(StatusBarAction::success(
                        format!("Deleted book {}", book_id),
                        operation.to_string(),
                    ));
                    dispatcher.dispatch(BooksApiAction::BookDeleted { book_id });
                    reload(service.as_ref(), &dispatcher).await;
                }
                Err(e) => fail(&dispatcher, operation, e),
            }
        });
    }
}

/// Fetch the full collection and report it
async fn reload(service: &dyn BooksService, dispatcher: &Dispatcher) {
    match service.list().await {
        Ok(books) => {
            dispatcher.dispatch(StatusBarAction::success(
                format!("Loaded {} books", books.len()),
                BooksOperation::Load.to_string(),
            ));
            dispatcher.dispatch(BooksApiAction::BooksLoaded { books });
        }
        Err(e) => fail(dispatcher, BooksOperation::Load, e),
    }
}

fn fail(dispatcher: &Dispatcher, operation: BooksOperation, error: anyhow::Error) {
    let error = format!("{:#}", error);
    log::warn!("BooksMiddleware: {} failed: {}", operation, error);
    dispatcher.dispatch(StatusBarAction::error(
        format!("{} failed: {}", operation, error),
        operation.to_string(),
    ));
    dispatcher.dispatch(BooksApiAction::RequestFailed { operation, error });
}

impl Middleware for BooksMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::BooksPage(BooksPageAction::Enter) => {
                self.load_books(dispatcher);
            }
            Action::BooksPage(BooksPageAction::CreateBook { book }) => {
                self.create_book(book.clone(), dispatcher);
            }
            Action::BooksPage(BooksPageAction::UpdateBook { book_id, changes }) => {
                self.update_book(book_id.clone(), changes.clone(), dispatcher);
            }
            Action::BooksPage(BooksPageAction::DeleteBook { book_id }) => {
                self.delete_book(book_id.clone(), dispatcher);
            }
            _ => {}
        }

        true // Intents still reach the reducer
    }
}
