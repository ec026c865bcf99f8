//! In-memory books service
//!
//! Behaves like the remote API (assigns ids, merges updates, rejects
//! unknown ids) without any I/O. Used when no API URL is configured and
//! as the service double in tests.

use crate::client::BooksService;
use async_trait::async_trait;
use book_models::{Book, BookChanges, BookRequiredProps};
use log::debug;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    books: Vec<Book>,
    next_id: u64,
    calls: usize,
    failure: Option<Failure>,
}

/// Injected failure for every call numbered above `after_call`
#[derive(Debug)]
struct Failure {
    after_call: usize,
    message: String,
}

/// Books service backed by a `Vec`
#[derive(Debug, Default)]
pub struct InMemoryBooksClient {
    inner: Mutex<Inner>,
}

impl InMemoryBooksClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with `books`
    pub fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.len() as u64;
        Self {
            inner: Mutex::new(Inner {
                books,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Number of calls made so far, failed ones included
    pub fn call_count(&self) -> usize {
        self.lock().calls
    }

    /// Snapshot of the stored books
    pub fn books(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        self.fail_after(0, message);
    }

    /// Let the next `calls` calls succeed, then fail every later one
    pub fn fail_after(&self, calls: usize, message: impl Into<String>) {
        let mut inner = self.lock();
        inner.failure = Some(Failure {
            after_call: inner.calls + calls,
            message: message.into(),
        });
    }

    /// Stop failing calls
    pub fn recover(&self) {
        self.lock().failure = None;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count the call and return the injected failure, if any
    fn begin_call(&self, name: &str) -> anyhow::Result<MutexGuard<'_, Inner>> {
        let mut inner = self.lock();
        inner.calls += 1;
        debug!("InMemoryBooksClient: {} (call #{})", name, inner.calls);
        if let Some(failure) = &inner.failure {
            if inner.calls > failure.after_call {
                return Err(anyhow::anyhow!("{}", failure.message));
            }
        }
        Ok(inner)
    }
}

#[async_trait]
impl BooksService for InMemoryBooksClient {
    async fn list(&self) -> anyhow::Result<Vec<Book>> {
        let inner = self.begin_call("list")?;
        Ok(inner.books.clone())
    }

    async fn create(&self, draft: &BookRequiredProps) -> anyhow::Result<Book> {
        let mut inner = self.begin_call("create")?;

        // Skip ids still held by seeded books
        let id = loop {
            inner.next_id += 1;
            let candidate = inner.next_id.to_string();
            if !inner.books.iter().any(|book| book.id == candidate) {
                break candidate;
            }
        };

        let book = draft.clone().into_book(id);
        inner.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: &str, book: &Book) -> anyhow::Result<BookChanges> {
        let mut inner = self.begin_call("update")?;
        let stored = inner
            .books
            .iter_mut()
            .find(|stored| stored.id == id)
            .ok_or_else(|| anyhow::anyhow!("Book {} not found", id))?;

        let mut changes = BookChanges::from(book.clone());
        changes.id = id.to_string();
        *stored = stored.merged(&changes);
        Ok(BookChanges::from(stored.clone()))
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        let mut inner = self.begin_call("delete")?;
        let before = inner.books.len();
        inner.books.retain(|book| book.id != id);
        if inner.books.len() == before {
            anyhow::bail!("Book {} not found", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let client = InMemoryBooksClient::with_books(vec![Book::new("1", "Seeded", 1.0)]);

        let first = client.create(&BookRequiredProps::new("A", 2.0)).await.unwrap();
        let second = client.create(&BookRequiredProps::new("B", 3.0)).await.unwrap();

        assert_ne!(first.id, "1");
        assert_ne!(first.id, second.id);
        assert_eq!(client.books().len(), 3);
    }

    #[tokio::test]
    async fn test_update_returns_stored_record() {
        let client = InMemoryBooksClient::with_books(vec![Book::new("1", "Old", 1.0)]);

        let updated = client
            .update("1", &Book::new("1", "New", 9.0))
            .await
            .unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.name.as_deref(), Some("New"));
        assert_eq!(client.books()[0].earnings, 9.0);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id_fail() {
        let client = InMemoryBooksClient::new();

        assert!(client.update("nope", &Book::new("nope", "X", 0.0)).await.is_err());
        assert!(client.delete("nope").await.is_err());
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let client = InMemoryBooksClient::with_books(vec![Book::new("1", "A", 1.0)]);
        client.fail_with("service unavailable");

        let err = client.list().await.unwrap_err();
        assert_eq!(err.to_string(), "service unavailable");

        client.recover();
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_fail_after_counts_from_now() {
        let client = InMemoryBooksClient::with_books(vec![Book::new("1", "A", 1.0)]);
        client.list().await.unwrap();

        client.fail_after(1, "gone");
        client.delete("1").await.unwrap();
        let err = client.list().await.unwrap_err();

        assert_eq!(err.to_string(), "gone");
        assert!(client.books().is_empty());
        assert_eq!(client.call_count(), 3);
    }
}
