//! Book domain types shared by the books client and the books page
//!
//! This crate provides:
//! - `Book`: a book record as stored by the books API
//! - `BookRequiredProps`: the fields needed to create a book (no id yet)
//! - `BookChanges`: a partial book used for shallow merges
//! - `calculate_books_gross_earnings`: the earnings aggregation

pub mod book;
pub mod earnings;

pub use book::{Book, BookChanges, BookRequiredProps, Fields};
pub use earnings::calculate_books_gross_earnings;
