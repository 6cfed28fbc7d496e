//! The Book record held by the catalog

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry
///
/// Books are immutable once loaded; the catalog hands them out behind `Arc` so
/// filter results reference the dataset instead of copying it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier within the catalog
    pub id: String,

    /// Book title
    #[serde(default)]
    pub title: String,

    /// Author id, resolved through the catalog's author lookup
    #[serde(default)]
    pub author: String,

    /// Cover image URL
    #[serde(default)]
    pub image: String,

    /// Book description/summary
    #[serde(default)]
    pub description: String,

    /// Publication date
    pub published: DateTime<Utc>,

    /// Genre ids
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Book {
    /// Create a new book with the required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        published: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            image: String::new(),
            description: String::new(),
            published,
            genres: Vec::new(),
        }
    }

    /// Add a genre id
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    /// Set the cover image URL
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Year of publication
    pub fn year(&self) -> i32 {
        self.published.year()
    }

    /// Whether the book is tagged with the given genre id
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
