//! List command implementation

use super::{browse, FilterArgs};
use anyhow::Result;
use bookshelf_core::page::NO_RESULTS;
use bookshelf_core::{Catalog, Theme};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ListedBook {
    id: String,
    title: String,
    author: String,
    year: i32,
}

#[derive(Serialize)]
struct Listing {
    books: Vec<ListedBook>,
    total: usize,
    shown: usize,
    remaining: usize,
}

/// Print the books matching the filters, up to the requested page
pub fn list(catalog: Arc<Catalog>, filters: &FilterArgs, json: bool) -> Result<()> {
    let browser = browse(catalog, filters, Theme::default());
    let catalog = browser.catalog();
    let view = browser.view();

    let listing = Listing {
        books: view
            .rendered()
            .iter()
            .map(|book| ListedBook {
                id: book.id.clone(),
                title: book.title.clone(),
                author: catalog.author_name(book).to_string(),
                year: book.year(),
            })
            .collect(),
        total: view.total(),
        shown: view.rendered_count(),
        remaining: view.remaining_display(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if browser.shows_empty_message() {
        println!("{}", NO_RESULTS);
        return Ok(());
    }

    for book in &listing.books {
        println!("{:<10} {} by {} ({})", book.id, book.title, book.author, book.year);
    }

    println!();
    println!("Showing {} of {} books", listing.shown, listing.total);
    if view.can_show_more() {
        println!(
            "{} (run with --page {})",
            browser.show_more_button().label(),
            view.page() + 1
        );
    }

    Ok(())
}
