//! Book records
//!
//! These types mirror the JSON shapes of the books API. Fields the API
//! returns beyond the typed ones are kept in `extra` so nothing is lost
//! on a round trip through the store.

use serde::{Deserialize, Serialize};

/// Untyped extra fields of a book record
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A book as stored by the books API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Opaque identifier assigned by the API
    pub id: String,

    /// Book title
    pub name: String,

    /// Gross earnings of this book
    #[serde(default)]
    pub earnings: f64,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Any additional fields returned by the API
    #[serde(flatten)]
    pub extra: Fields,
}

impl Book {
    pub fn new(id: impl Into<String>, name: impl Into<String>, earnings: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            earnings,
            description: String::new(),
            extra: Fields::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set an extra, untyped field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Shallow merge: fields present in `changes` win, absent ones are kept.
    ///
    /// The id is never changed by a merge.
    pub fn merged(&self, changes: &BookChanges) -> Book {
        let mut book = self.clone();
        if let Some(name) = &changes.name {
            book.name = name.clone();
        }
        if let Some(earnings) = changes.earnings {
            book.earnings = earnings;
        }
        if let Some(description) = &changes.description {
            book.description = description.clone();
        }
        for (key, value) in &changes.extra {
            book.extra.insert(key.clone(), value.clone());
        }
        book
    }

    /// Strip the id, e.g. to resubmit a record as a draft
    pub fn to_required_props(&self) -> BookRequiredProps {
        BookRequiredProps {
            name: self.name.clone(),
            earnings: self.earnings,
            description: self.description.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// The fields required to create a book; the API assigns the id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRequiredProps {
    pub name: String,

    #[serde(default)]
    pub earnings: f64,

    #[serde(default)]
    pub description: String,

    #[serde(flatten)]
    pub extra: Fields,
}

impl BookRequiredProps {
    pub fn new(name: impl Into<String>, earnings: f64) -> Self {
        Self {
            name: name.into(),
            earnings,
            ..Default::default()
        }
    }

    /// Attach an id, producing a full record
    pub fn into_book(self, id: impl Into<String>) -> Book {
        Book {
            id: id.into(),
            name: self.name,
            earnings: self.earnings,
            description: self.description,
            extra: self.extra,
        }
    }
}

/// A partial book: only `id` is required, every present field overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookChanges {
    /// Replies may leave the id out; the caller then knows it from the request
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Fields,
}

impl BookChanges {
    /// Changes touching no field yet
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn earnings(mut self, earnings: f64) -> Self {
        self.earnings = Some(earnings);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<Book> for BookChanges {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: Some(book.name),
            earnings: Some(book.earnings),
            description: Some(book.description),
            extra: book.extra,
        }
    }
}
