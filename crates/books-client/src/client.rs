//! Books service trait
//!
//! Defines the boundary between the books page and the remote books API.

use async_trait::async_trait;
use book_models::{Book, BookChanges, BookRequiredProps};

/// Remote books service
///
/// All calls are single-shot: one request, one response.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared with the
/// tasks spawned for each remote call.
///
/// # Example
///
/// ```rust,ignore
/// use books_client::BooksService;
///
/// async fn count(service: &dyn BooksService) -> anyhow::Result<usize> {
///     Ok(service.list().await?.len())
/// }
/// ```
#[async_trait]
pub trait BooksService: Send + Sync {
    /// Fetch the full collection of books
    async fn list(&self) -> anyhow::Result<Vec<Book>>;

    /// Create a book from a draft
    ///
    /// # Returns
    ///
    /// The stored record, including the id assigned by the service.
    async fn create(&self, draft: &BookRequiredProps) -> anyhow::Result<Book>;

    /// Update the book with the given id
    ///
    /// # Arguments
    ///
    /// * `id` - Id of the book to update
    /// * `book` - The edited record
    ///
    /// # Returns
    ///
    /// The service's reply as changes to merge into the stored record.
    /// Fields the reply leaves out are `None`.
    async fn update(&self, id: &str, book: &Book) -> anyhow::Result<BookChanges>;

    /// Delete the book with the given id
    async fn delete(&self, id: &str) -> anyhow::Result<()>;
}
