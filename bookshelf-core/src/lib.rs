//! Bookshelf Core Library
//!
//! This crate provides the catalog types, filtering and pagination logic, and the
//! HTML components for the Bookshelf catalog browser. The HTTP server and the CLI
//! are thin surfaces over the [`Browser`] controller defined here.

pub mod browser;
pub mod catalog;
pub mod components;
pub mod error;
pub mod filter;
pub mod page;
pub mod theme;
pub mod types;
pub mod view;

pub use browser::{Browser, Event, ListUpdate, ShowMoreButton, Update};
pub use catalog::{Catalog, DEFAULT_BOOKS_PER_PAGE};
pub use error::{BookshelfError, CatalogError, ParseThemeError, Result};
pub use filter::{filter, FilterCriteria, Selection};
pub use page::{Location, Overlay};
pub use theme::{ColorScheme, Palette, Rgb, Theme};
pub use types::{Book, Lookup, UNKNOWN};
pub use view::ViewState;
