//! Books Reducer
//!
//! Handles the books slice: the collection and the active selection.
//! Every change to the collection produces a new `Arc`; actions that leave
//! the books untouched keep the old one.

use crate::actions::{BooksApiAction, BooksPageAction};
use crate::state::BooksState;
use book_models::{Book, BookChanges};
use std::sync::Arc;

/// Append a book, or replace the entry holding the same id
fn create_book(books: &Arc<Vec<Book>>, book: &Book) -> Arc<Vec<Book>> {
    let mut next = books.as_ref().clone();
    match next.iter().position(|existing| existing.id == book.id) {
        Some(idx) => {
            log::warn!("Created book {} already in collection, replacing it", book.id);
            next[idx] = book.clone();
        }
        None => next.push(book.clone()),
    }
    Arc::new(next)
}

/// Shallow-merge `changes` into the entry with the same id
fn update_book(books: &Arc<Vec<Book>>, changes: &BookChanges) -> Arc<Vec<Book>> {
    let Some(idx) = books.iter().position(|book| book.id == changes.id) else {
        log::debug!("Update for unknown book {} ignored", changes.id);
        return Arc::clone(books);
    };

    let mut next = books.as_ref().clone();
    next[idx] = next[idx].merged(changes);
    Arc::new(next)
}

fn delete_book(books: &Arc<Vec<Book>>, book_id: &str) -> Arc<Vec<Book>> {
    if !books.iter().any(|book| book.id == book_id) {
        log::debug!("Delete for unknown book {} ignored", book_id);
        return Arc::clone(books);
    }

    Arc::new(
        books
            .iter()
            .filter(|book| book.id != book_id)
            .cloned()
            .collect(),
    )
}

/// Reduce page intents
///
/// Create/update/delete intents are side effects only; the collection
/// changes once the service confirms them.
pub fn reduce_books_page(mut state: BooksState, action: &BooksPageAction) -> BooksState {
    match action {
        BooksPageAction::Enter | BooksPageAction::ClearSelectedBook => {
            state.active_book_id = None;
        }
        BooksPageAction::SelectBook { book_id } => {
            state.active_book_id = Some(book_id.clone());
        }
        BooksPageAction::CreateBook { .. }
        | BooksPageAction::UpdateBook { .. }
        | BooksPageAction::DeleteBook { .. } => {}
    }
    state
}

/// Reduce books service results
pub fn reduce_books_api(mut state: BooksState, action: &BooksApiAction) -> BooksState {
    match action {
        BooksApiAction::BooksLoaded { books } => {
            log::info!("Loaded {} books", books.len());
            state.collection = Arc::new(books.clone());
        }
        BooksApiAction::BookCreated { book } => {
            state.collection = create_book(&state.collection, book);
            state.active_book_id = None;
        }
        BooksApiAction::BookUpdated { book } => {
            state.collection = update_book(&state.collection, book);
            state.active_book_id = None;
        }
        BooksApiAction::BookDeleted { book_id } => {
            // The selection is kept even if it pointed at the deleted book
            state.collection = delete_book(&state.collection, book_id);
        }
        BooksApiAction::RequestStarted { .. } | BooksApiAction::RequestFailed { .. } => {}
    }
    state
}
