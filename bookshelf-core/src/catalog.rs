//! The dataset provider: books, author and genre lookups, and the page size
//!
//! A catalog is loaded once (from the embedded sample dataset or a JSON file)
//! and is read-only afterwards.

use crate::error::{CatalogError, Result};
use crate::types::{Book, Lookup};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Page size used when a dataset does not specify one
pub const DEFAULT_BOOKS_PER_PAGE: usize = 36;

const SAMPLE_DATASET: &str = include_str!("../data/books.json");

/// On-disk dataset layout
#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(default = "default_books_per_page")]
    books_per_page: usize,
    #[serde(default)]
    authors: Lookup,
    #[serde(default)]
    genres: Lookup,
    books: Vec<Book>,
}

fn default_books_per_page() -> usize {
    DEFAULT_BOOKS_PER_PAGE
}

/// Static, read-only book catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Arc<Book>>,
    /// Book id -> position in `books`
    index: HashMap<String, usize>,
    authors: Lookup,
    genres: Lookup,
    page_size: usize,
}

impl Catalog {
    /// Build a catalog from already-loaded parts
    pub fn new(
        books: Vec<Book>,
        authors: Lookup,
        genres: Lookup,
        page_size: usize,
    ) -> std::result::Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize(page_size));
        }

        let mut index = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            if index.insert(book.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }
        }

        Ok(Self {
            books: books.into_iter().map(Arc::new).collect(),
            index,
            authors,
            genres,
            page_size,
        })
    }

    /// Parse a catalog from dataset JSON
    pub fn from_json(json: &str) -> std::result::Result<Self, CatalogError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::from_dataset(dataset)
    }

    /// Parse a catalog from a reader yielding dataset JSON
    pub fn from_reader(reader: impl Read) -> std::result::Result<Self, CatalogError> {
        let dataset: Dataset = serde_json::from_reader(reader)?;
        Self::from_dataset(dataset)
    }

    /// Load a catalog from a dataset file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&data)?;
        tracing::debug!(
            "Loaded {} books from {} (page size {})",
            catalog.len(),
            path.display(),
            catalog.page_size
        );
        Ok(catalog)
    }

    /// The dataset bundled with the crate
    pub fn sample() -> std::result::Result<Self, CatalogError> {
        Self::from_json(SAMPLE_DATASET)
    }

    fn from_dataset(dataset: Dataset) -> std::result::Result<Self, CatalogError> {
        Self::new(
            dataset.books,
            dataset.authors,
            dataset.genres,
            dataset.books_per_page,
        )
    }

    /// Replace the page size
    pub fn with_page_size(mut self, page_size: usize) -> std::result::Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// All books in dataset order
    pub fn books(&self) -> &[Arc<Book>] {
        &self.books
    }

    /// Look a book up by id
    pub fn get(&self, id: &str) -> Option<&Arc<Book>> {
        self.index.get(id).map(|&position| &self.books[position])
    }

    pub fn authors(&self) -> &Lookup {
        &self.authors
    }

    pub fn genres(&self) -> &Lookup {
        &self.genres
    }

    /// Number of books rendered per page / show-more increment
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Display name of a book's author, falling back to "Unknown"
    pub fn author_name(&self, book: &Book) -> &str {
        self.authors.name_or_unknown(&book.author)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
