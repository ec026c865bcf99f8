use book_models::Book;
use std::sync::Arc;

/// Books slice: the canonical collection plus the active selection
///
/// The collection sits behind an `Arc` and is swapped for a new one
/// whenever its content changes. Two states sharing the same pointer are
/// guaranteed to hold the same books.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooksState {
    /// Books, unique by id
    pub collection: Arc<Vec<Book>>,
    /// Id of the selected book; may not resolve to a book in `collection`
    pub active_book_id: Option<String>,
}

impl BooksState {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            collection: Arc::new(books),
            active_book_id: None,
        }
    }
}
