//! Books API client
//!
//! This crate provides a trait-based client for the remote books service.
//! The page only ever talks to `BooksService`; which implementation backs
//! it is decided when the application starts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              BooksService trait                  │
//! │  - list()                                        │
//! │  - create() / update() / delete()                │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ HttpBooksClient │         │ InMemoryBooksClient │
//! │ (JSON over HTTP)│         │ (offline, tests)    │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use books_client::{BooksService, HttpBooksClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpBooksClient::new("http://localhost:3000")?;
//! let books = client.list().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_client;
pub mod memory_client;

pub use client::BooksService;
pub use http_client::{BooksClientError, HttpBooksClient};
pub use memory_client::InMemoryBooksClient;

pub use book_models::{Book, BookChanges, BookRequiredProps};
