use crate::Book;

/// Sum of the earnings of all books.
///
/// Non-finite earnings count as zero so one bad record cannot poison the total.
pub fn calculate_books_gross_earnings(books: &[Book]) -> f64 {
    books
        .iter()
        .map(|book| book.earnings)
        .filter(|earnings| earnings.is_finite())
        .fold(0.0, |total, earnings| total + earnings)
}
