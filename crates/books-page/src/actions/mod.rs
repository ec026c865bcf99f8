//! Actions module
//!
//! All actions in the application, tagged by their origin:
//! - `BooksPage`: intents issued by the page (user interaction)
//! - `BooksApi`: facts reported back by the books service
//! - `StatusBar`: user feedback for running operations

pub mod books_api;
pub mod books_page;
pub mod status_bar;

pub use books_api::{BooksApiAction, BooksOperation};
pub use books_page::BooksPageAction;
pub use status_bar::StatusBarAction;

/// Root action enum - tagged by origin
#[derive(Debug, Clone)]
pub enum Action {
    /// Intents dispatched by the books page
    BooksPage(BooksPageAction),
    /// Results of books service calls
    BooksApi(BooksApiAction),
    /// Status bar actions
    StatusBar(StatusBarAction),
}

impl From<BooksPageAction> for Action {
    fn from(action: BooksPageAction) -> Self {
        Action::BooksPage(action)
    }
}

impl From<BooksApiAction> for Action {
    fn from(action: BooksApiAction) -> Self {
        Action::BooksApi(action)
    }
}

impl From<StatusBarAction> for Action {
    fn from(action: StatusBarAction) -> Self {
        Action::StatusBar(action)
    }
}
