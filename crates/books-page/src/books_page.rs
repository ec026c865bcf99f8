//! Books page controller
//!
//! Mediates between the user, the store and (through `BooksMiddleware`)
//! the books service. The page only dispatches intents; everything it
//! shows comes from three views the store pushes to it:
//!
//! | View           | Source                                 |
//! |----------------|----------------------------------------|
//! | `books`        | `select_all`                           |
//! | `current_book` | `ActiveBookSelector` (memoized)        |
//! | `total`        | `TotalEarningsSelector` (memoized)     |
//!
//! The views are refreshed by a store subscriber after every reduced
//! action. Nothing is cached on the page outside of them.

use crate::actions::BooksPageAction;
use crate::selectors::{select_all, ActiveBookSelector, TotalEarningsSelector};
use crate::state::AppState;
use crate::store::Store;
use book_models::{Book, BookRequiredProps};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What `BooksPage::save` should do with the edited record
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    /// A new book; the service assigns the id
    Create(BookRequiredProps),
    /// Edits to an existing book
    Update(Book),
}

impl From<BookRequiredProps> for SaveRequest {
    fn from(draft: BookRequiredProps) -> Self {
        SaveRequest::Create(draft)
    }
}

impl From<Book> for SaveRequest {
    fn from(book: Book) -> Self {
        SaveRequest::Update(book)
    }
}

/// Views pushed to the page by the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooksPageViews {
    pub books: Arc<Vec<Book>>,
    pub current_book: Option<Book>,
    pub total: f64,
}

#[derive(Debug, Default)]
struct PageSelectors {
    active_book: ActiveBookSelector,
    total_earnings: TotalEarningsSelector,
}

impl PageSelectors {
    fn views(&mut self, state: &AppState) -> BooksPageViews {
        BooksPageViews {
            books: Arc::clone(select_all(&state.books)),
            current_book: self.active_book.select(&state.books),
            total: self.total_earnings.select(&state.books),
        }
    }
}

pub struct BooksPage {
    store: Store,
    views: Rc<RefCell<BooksPageViews>>,
    selectors: Rc<RefCell<PageSelectors>>,
}

impl BooksPage {
    /// Bind a page to `store`
    pub fn new(mut store: Store) -> Self {
        let selectors = Rc::new(RefCell::new(PageSelectors::default()));
        let views = Rc::new(RefCell::new(selectors.borrow_mut().views(store.state())));

        let subscriber_views = Rc::clone(&views);
        let subscriber_selectors = Rc::clone(&selectors);
        store.subscribe(move |state| {
            let next = subscriber_selectors.borrow_mut().views(state);
            *subscriber_views.borrow_mut() = next;
        });

        Self {
            store,
            views,
            selectors,
        }
    }

    /// Open the page: drop any stale selection and load the collection
    pub fn initialize(&mut self) {
        self.store.dispatch(BooksPageAction::ClearSelectedBook);
        self.store.dispatch(BooksPageAction::Enter);
    }

    pub fn select(&mut self, book: &Book) {
        self.store.dispatch(BooksPageAction::SelectBook {
            book_id: book.id.clone(),
        });
    }

    pub fn cancel_selection(&mut self) {
        self.store.dispatch(BooksPageAction::ClearSelectedBook);
    }

    /// Create a draft or update an existing book
    pub fn save(&mut self, request: impl Into<SaveRequest>) {
        let action = match request.into() {
            SaveRequest::Create(book) => BooksPageAction::CreateBook { book },
            SaveRequest::Update(book) => BooksPageAction::UpdateBook {
                book_id: book.id.clone(),
                changes: book,
            },
        };
        self.store.dispatch(action);
    }

    pub fn delete(&mut self, book: &Book) {
        self.store.dispatch(BooksPageAction::DeleteBook {
            book_id: book.id.clone(),
        });
    }

    /// All books
    pub fn books(&self) -> Arc<Vec<Book>> {
        Arc::clone(&self.views.borrow().books)
    }

    /// The selected book, if its id resolves
    pub fn current_book(&self) -> Option<Book> {
        self.views.borrow().current_book.clone()
    }

    /// Gross earnings of all books
    pub fn total(&self) -> f64 {
        self.views.borrow().total
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Process one completed service result, waiting at most `timeout`
    pub fn poll(&mut self, timeout: Duration) -> bool {
        self.store.process_next(timeout)
    }

    /// Process service results until `done` holds or `timeout` runs out
    ///
    /// Returns whether `done` holds.
    pub fn wait_until(&mut self, timeout: Duration, done: impl Fn(&AppState) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while !done(self.store.state()) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            self.store.process_next(remaining);
        }
        true
    }

    /// Process service results until no call is outstanding
    pub fn wait_for_idle(&mut self, timeout: Duration) -> bool {
        self.wait_until(timeout, |state| state.requests.is_idle())
    }

    /// How often the active book and total earnings were recomputed
    pub fn recomputations(&self) -> (usize, usize) {
        let selectors = self.selectors.borrow();
        (
            selectors.active_book.recomputations(),
            selectors.total_earnings.recomputations(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::BooksApiAction;
    use crate::middleware::{BooksMiddleware, LoggingMiddleware};
    use books_client::InMemoryBooksClient;
    use tokio::runtime::Runtime;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn page_with(service: Arc<InMemoryBooksClient>) -> (Runtime, BooksPage) {
        let runtime = Runtime::new().unwrap();
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(BooksMiddleware::new(
            service,
            runtime.handle().clone(),
        )));
        (runtime, BooksPage::new(store))
    }

    fn seeded() -> Arc<InMemoryBooksClient> {
        Arc::new(InMemoryBooksClient::with_books(vec![
            Book::new("1", "A", 5.0),
            Book::new("2", "B", 7.0),
        ]))
    }

    #[test]
    fn test_new_page_starts_empty() {
        let page = BooksPage::new(Store::new(AppState::default()));
        assert!(page.books().is_empty());
        assert_eq!(page.current_book(), None);
        assert_eq!(page.total(), 0.0);
    }

    #[test]
    fn test_initialize_loads_books_and_total() {
        let (_runtime, mut page) = page_with(seeded());

        page.initialize();
        assert!(page.wait_for_idle(TIMEOUT));

        assert_eq!(page.books().len(), 2);
        assert_eq!(page.total(), 12.0);
        assert_eq!(page.current_book(), None);
    }

    #[test]
    fn test_select_and_cancel() {
        let (_runtime, mut page) = page_with(seeded());
        page.initialize();
        assert!(page.wait_for_idle(TIMEOUT));

        let book = page.books()[1].clone();
        page.select(&book);
        assert_eq!(page.current_book(), Some(book));

        page.cancel_selection();
        assert_eq!(page.current_book(), None);
    }

    #[test]
    fn test_selection_does_not_recompute_total() {
        let (_runtime, mut page) = page_with(seeded());
        page.initialize();
        assert!(page.wait_for_idle(TIMEOUT));
        let (_, totals_before) = page.recomputations();

        let book = page.books()[0].clone();
        page.select(&book);
        page.cancel_selection();

        let (_, totals_after) = page.recomputations();
        assert_eq!(totals_before, totals_after);
    }

    #[test]
    fn test_save_draft_creates_book() {
        let service = seeded();
        let (_runtime, mut page) = page_with(Arc::clone(&service));
        page.initialize();
        assert!(page.wait_for_idle(TIMEOUT));

        page.save(BookRequiredProps::new("C", 3.0));
        assert!(page.wait_for_idle(TIMEOUT));

        assert_eq!(page.books().len(), 3);
        assert_eq!(page.total(), 15.0);
        assert_eq!(page.books().as_ref(), &service.books());
    }

    #[test]
    fn test_save_existing_updates_book() {
        let (_runtime, mut page) = page_with(seeded());
        page.initialize();
        assert!(page.wait_for_idle(TIMEOUT));

        let mut book = page.books()[0].clone();
        page.select(&book);
        book.earnings = 50.0;
        page.save(book);
        assert!(page.wait_for_idle(TIMEOUT));

        assert_eq!(page.books()[0].earnings, 50.0);
        assert_eq!(page.total(), 57.0);
        assert_eq!(page.current_book(), None);
    }

    #[test]
    fn test_delete_selected_book() {
        let (_runtime, mut page) = page_with(seeded());
        page.initialize();
        assert!(page.wait_for_idle(TIMEOUT));

        let book = page.books()[1].clone();
        page.select(&book);
        page.delete(&book);
        assert!(page.wait_for_idle(TIMEOUT));

        assert_eq!(page.books().len(), 1);
        assert_eq!(page.total(), 5.0);
        assert_eq!(page.current_book(), None);
    }

    #[test]
    fn test_failed_save_reports_error() {
        let service = seeded();
        let (_runtime, mut page) = page_with(Arc::clone(&service));
        page.initialize();
        assert!(page.wait_for_idle(TIMEOUT));

        service.fail_with("offline");
        page.save(BookRequiredProps::new("C", 3.0));
        assert!(page.wait_for_idle(TIMEOUT));

        assert_eq!(page.books().len(), 2);
        assert_eq!(page.state().requests.last_error.as_deref(), Some("offline"));
    }

    #[test]
    fn test_end_to_end_without_service() {
        let mut store = Store::new(AppState::default());
        let dispatcher = store.dispatcher().clone();
        store.dispatch(BooksPageAction::Enter);
        let mut page = BooksPage::new(store);

        dispatcher.dispatch(BooksApiAction::BooksLoaded {
            books: vec![Book::new("1", "A", 5.0), Book::new("2", "B", 7.0)],
        });
        assert!(page.poll(TIMEOUT));
        assert_eq!(page.total(), 12.0);

        let second = page.books()[1].clone();
        page.select(&second);
        assert_eq!(page.current_book().map(|b| b.id), Some("2".to_string()));

        dispatcher.dispatch(BooksApiAction::BookDeleted {
            book_id: "2".into(),
        });
        assert!(page.poll(TIMEOUT));
        assert_eq!(page.state().books.active_book_id.as_deref(), Some("2"));
        assert_eq!(page.current_book(), None);

        page.cancel_selection();
        assert_eq!(page.state().books.active_book_id, None);
    }
}
