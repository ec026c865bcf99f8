//! Actions reporting the outcome of books service calls.

use book_models::{Book, BookChanges};
use std::fmt;

/// Remote operation a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooksOperation {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for BooksOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "Load Books",
            Self::Create => "Create Book",
            Self::Update => "Update Book",
            Self::Delete => "Delete Book",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BooksApiAction {
    /// A service call was started
    RequestStarted { operation: BooksOperation },

    /// The full collection was fetched
    BooksLoaded { books: Vec<Book> },

    /// The service stored a new book
    BookCreated { book: Book },

    /// The service stored changes to a book
    BookUpdated { book: BookChanges },

    /// The service deleted a book
    BookDeleted { book_id: String },

    /// A service call failed
    RequestFailed {
        operation: BooksOperation,
        error: String,
    },
}

impl BooksApiAction {
    /// Whether this action ends a service call started with `RequestStarted`
    pub fn completes_request(&self) -> bool {
        matches!(self, Self::BooksLoaded { .. } | Self::RequestFailed { .. })
    }
}
