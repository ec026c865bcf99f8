//! HTTP books client
//!
//! JSON over HTTP against a REST-style books API:
//!
//! | Call     | Request                    |
//! |----------|----------------------------|
//! | `list`   | `GET    {base}/books`      |
//! | `create` | `POST   {base}/books`      |
//! | `update` | `PATCH  {base}/books/{id}` |
//! | `delete` | `DELETE {base}/books/{id}` |

use crate::client::BooksService;
use async_trait::async_trait;
use book_models::{Book, BookChanges, BookRequiredProps};
use log::debug;
use reqwest::Url;

const USER_AGENT: &str = concat!("books-page/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum BooksClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid books API URL: {0}")]
    InvalidUrl(String),
    #[error("{method} {url} failed with status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
}

/// Books client talking to a remote API
#[derive(Debug, Clone)]
pub struct HttpBooksClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBooksClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, BooksClientError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(base_url, http))
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    /// URL of a single book, with `id` encoded as one path segment
    fn book_url(&self, id: &str) -> Result<Url, BooksClientError> {
        let books_url = self.books_url();
        let mut url =
            Url::parse(&books_url).map_err(|_| BooksClientError::InvalidUrl(books_url.clone()))?;
        url.path_segments_mut()
            .map_err(|_| BooksClientError::InvalidUrl(books_url))?
            .push(id);
        Ok(url)
    }

    /// Turn a non-success status into an error
    fn check_status(
        method: &'static str,
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, BooksClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(BooksClientError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl BooksService for HttpBooksClient {
    async fn list(&self) -> anyhow::Result<Vec<Book>> {
        let url = self.books_url();
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(BooksClientError::from)?;
        let books: Vec<Book> = Self::check_status("GET", &url, response)?
            .json()
            .await
            .map_err(BooksClientError::from)?;

        debug!("Fetched {} books", books.len());
        Ok(books)
    }

    async fn create(&self, draft: &BookRequiredProps) -> anyhow::Result<Book> {
        let url = self.books_url();
        debug!("POST {} ({})", url, draft.name);

        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(BooksClientError::from)?;
        let book = Self::check_status("POST", &url, response)?
            .json()
            .await
            .map_err(BooksClientError::from)?;
        Ok(book)
    }

    async fn update(&self, id: &str, book: &Book) -> anyhow::Result<BookChanges> {
        let url = self.book_url(id)?;
        debug!("PATCH {}", url);

        let response = self
            .http
            .patch(url.clone())
            .json(book)
            .send()
            .await
            .map_err(BooksClientError::from)?;
        // The reply may be partial; fields it leaves out stay unset
        let mut changes: BookChanges = Self::check_status("PATCH", url.as_str(), response)?
            .json()
            .await
            .map_err(BooksClientError::from)?;
        if changes.id.is_empty() {
            changes.id = id.to_string();
        }
        Ok(changes)
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        let url = self.book_url(id)?;
        debug!("DELETE {}", url);

        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(BooksClientError::from)?;
        Self::check_status("DELETE", url.as_str(), response)?;
        Ok(())
    }
}
