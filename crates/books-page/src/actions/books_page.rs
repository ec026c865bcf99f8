//! Actions issued by the books page.

use book_models::{Book, BookRequiredProps};

#[derive(Debug, Clone, PartialEq)]
pub enum BooksPageAction {
    /// The page was opened
    Enter,

    /// Mark a book as the active one
    SelectBook { book_id: String },

    /// Drop the active selection
    ClearSelectedBook,

    /// Create a book from a draft
    CreateBook { book: BookRequiredProps },

    /// Persist edits to an existing book
    UpdateBook { book_id: String, changes: Book },

    /// Delete a book
    DeleteBook { book_id: String },
}
