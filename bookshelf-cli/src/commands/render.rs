//! Render command implementation

use super::{browse, FilterArgs};
use anyhow::{Context, Result};
use bookshelf_core::page::render_document;
use bookshelf_core::{Catalog, Event, Theme};
use std::fs;
use std::sync::Arc;

/// Write the catalog page for the given filters to a static HTML file
pub fn render(
    catalog: Arc<Catalog>,
    filters: &FilterArgs,
    theme: Theme,
    book: Option<&str>,
    output: &str,
) -> Result<()> {
    let mut browser = browse(catalog, filters, theme);
    if let Some(id) = book {
        browser.handle(Event::PreviewClicked(Some(id.to_string())));
        if browser.active().is_none() {
            tracing::warn!("No book with id {}, detail overlay stays closed", id);
        }
    }

    let html = render_document(&browser);
    fs::write(output, html).with_context(|| format!("Failed to write output file: {}", output))?;

    tracing::info!(
        "Rendered {} of {} books to {}",
        browser.view().rendered_count(),
        browser.view().total(),
        output
    );

    Ok(())
}
