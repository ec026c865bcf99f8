//! Selectors
//!
//! Plain selectors project the books slice. Derived values that cost a
//! scan of the collection are memoized: they keep the inputs of their last
//! run and only recompute when one of those inputs changed. The
//! collection is compared by pointer, the active id by value.

use crate::state::BooksState;
use book_models::{calculate_books_gross_earnings, Book};
use std::sync::Arc;

/// Input of a memoized selector
pub trait SelectorInput {
    /// Whether `other` would produce the same output as `self`
    fn same_as(&self, other: &Self) -> bool;
}

impl<T> SelectorInput for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl SelectorInput for Option<String> {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

impl<A: SelectorInput, B: SelectorInput> SelectorInput for (A, B) {
    fn same_as(&self, other: &Self) -> bool {
        self.0.same_as(&other.0) && self.1.same_as(&other.1)
    }
}

/// Last-inputs/last-output cache
#[derive(Debug)]
pub struct Memoized<I, O> {
    last: Option<(I, O)>,
    recomputations: usize,
}

impl<I, O> Default for Memoized<I, O> {
    fn default() -> Self {
        Self {
            last: None,
            recomputations: 0,
        }
    }
}

impl<I: SelectorInput, O: Clone> Memoized<I, O> {
    /// Return the cached output if `input` matches the last one, otherwise
    /// run `project` and cache its result
    pub fn select(&mut self, input: I, project: impl FnOnce(&I) -> O) -> O {
        if let Some((last_input, output)) = &self.last {
            if last_input.same_as(&input) {
                return output.clone();
            }
        }

        let output = project(&input);
        self.recomputations += 1;
        self.last = Some((input, output.clone()));
        output
    }

    /// How many times the projection actually ran
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

pub fn select_all(state: &BooksState) -> &Arc<Vec<Book>> {
    &state.collection
}

pub fn select_active_book_id(state: &BooksState) -> Option<&str> {
    state.active_book_id.as_deref()
}

/// First book whose id equals `active_book_id`
pub fn find_active_book(books: &[Book], active_book_id: Option<&str>) -> Option<Book> {
    let active_book_id = active_book_id?;
    books.iter().find(|book| book.id == active_book_id).cloned()
}

/// Memoized active book, keyed on the collection and the active id
#[derive(Debug, Default)]
pub struct ActiveBookSelector {
    memo: Memoized<(Arc<Vec<Book>>, Option<String>), Option<Book>>,
}

impl ActiveBookSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, state: &BooksState) -> Option<Book> {
        let input = (
            Arc::clone(select_all(state)),
            select_active_book_id(state).map(str::to_string),
        );
        self.memo.select(input, |(books, active_book_id)| {
            find_active_book(books, active_book_id.as_deref())
        })
    }

    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }
}

/// Memoized gross earnings, keyed on the collection alone
#[derive(Debug, Default)]
pub struct TotalEarningsSelector {
    memo: Memoized<Arc<Vec<Book>>, f64>,
}

impl TotalEarningsSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, state: &BooksState) -> f64 {
        self.memo.select(Arc::clone(select_all(state)), |books| {
            calculate_books_gross_earnings(books)
        })
    }

    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }
}
