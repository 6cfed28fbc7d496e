//! Application state

use anyhow::{Context, Result};
use bookshelf_core::{Browser, Catalog, ColorScheme, Event, FilterCriteria, Overlay, Theme};
use serde::Deserialize;
use std::sync::Arc;

/// Shared application state
///
/// The catalog is read-only; every request rebuilds its own [`Browser`] from
/// the query string, so nothing here needs a lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Load the catalog named by the environment
    ///
    /// `BOOKSHELF_DATASET` points at a dataset file (default: the bundled
    /// sample), `BOOKSHELF_PAGE_SIZE` overrides the dataset's page size.
    pub fn from_env() -> Result<Self> {
        let catalog = match std::env::var("BOOKSHELF_DATASET").ok() {
            Some(path) => {
                Catalog::load(&path).with_context(|| format!("Failed to load dataset {}", path))?
            }
            None => Catalog::sample().context("Bundled dataset is invalid")?,
        };

        let catalog = match std::env::var("BOOKSHELF_PAGE_SIZE").ok() {
            Some(size) => {
                let size: usize = size
                    .parse()
                    .with_context(|| format!("BOOKSHELF_PAGE_SIZE '{}' is not a number", size))?;
                catalog.with_page_size(size)?
            }
            None => catalog,
        };

        tracing::info!(
            "Catalog ready: {} books, {} authors, {} genres, {} per page",
            catalog.len(),
            catalog.authors().len(),
            catalog.genres().len(),
            catalog.page_size()
        );

        Ok(Self::new(catalog))
    }

    /// Replay the browsing state described by `query` on a fresh controller
    pub fn browser(&self, query: &BrowseQuery, preference: Option<ColorScheme>) -> Browser {
        let theme = query
            .theme
            .as_deref()
            .map(Theme::from_form_value)
            .unwrap_or_else(|| Theme::from_preference(preference));

        let mut browser = Browser::new(self.catalog.clone(), theme);
        browser.replay(query.criteria(), query.page);

        match query.overlay.as_deref().and_then(Overlay::from_query_value) {
            Some(Overlay::Search) => {
                browser.handle(Event::OpenSearch);
            }
            Some(Overlay::Settings) => {
                browser.handle(Event::OpenSettings);
            }
            None => {}
        }

        browser
    }
}

/// Browsing state carried in the query string
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    pub genre: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,

    /// Pages rendered so far (1-indexed, 0 treated as 1)
    #[serde(default = "default_page")]
    pub page: usize,

    pub theme: Option<String>,
    pub overlay: Option<String>,
}

fn default_page() -> usize {
    1
}

impl BrowseQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(
            self.genre.as_deref(),
            self.title.as_deref(),
            self.author.as_deref(),
        )
    }
}
