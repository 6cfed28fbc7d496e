//! CLI command implementations

mod list;
mod lookups;
mod render;
mod show;

pub use list::list;
pub use lookups::{authors, genres};
pub use render::render;
pub use show::show;

use anyhow::{Context, Result};
use bookshelf_core::{Browser, Catalog, FilterCriteria, Theme};
use clap::Args;
use std::sync::Arc;

/// Search filters shared by `list` and `render`
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Genre id ("any" for all genres)
    #[arg(long)]
    pub genre: Option<String>,

    /// Case-insensitive title substring
    #[arg(long)]
    pub title: Option<String>,

    /// Author id ("any" for all authors)
    #[arg(long)]
    pub author: Option<String>,

    /// Number of pages to show (cumulative)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(
            self.genre.as_deref(),
            self.title.as_deref(),
            self.author.as_deref(),
        )
    }
}

/// Load the dataset file, or the bundled sample when none is given
pub fn load_catalog(dataset: Option<&str>, page_size: Option<usize>) -> Result<Arc<Catalog>> {
    let catalog = match dataset {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("Failed to load dataset: {}", path))?
        }
        None => Catalog::sample().context("Bundled dataset is invalid")?,
    };

    let catalog = match page_size {
        Some(size) => catalog.with_page_size(size)?,
        None => catalog,
    };

    tracing::debug!(
        "Loaded {} books ({} per page)",
        catalog.len(),
        catalog.page_size()
    );

    Ok(Arc::new(catalog))
}

/// A fresh browser showing the search and pages `filters` describes
pub fn browse(catalog: Arc<Catalog>, filters: &FilterArgs, theme: Theme) -> Browser {
    let mut browser = Browser::new(catalog, theme);
    browser.replay(filters.criteria(), filters.page);
    browser
}
