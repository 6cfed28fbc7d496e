//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using BookshelfError
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Top-level error type for all Bookshelf operations
#[derive(Debug, Error)]
pub enum BookshelfError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while loading a dataset into a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid dataset: {0}")]
    InvalidDataset(#[from] serde_json::Error),

    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    #[error("Duplicate book id: {0}")]
    DuplicateBook(String),
}

/// Returned when a theme name is neither "day" nor "night"
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown theme: {0} (expected \"day\" or \"night\")")]
pub struct ParseThemeError(pub String);
