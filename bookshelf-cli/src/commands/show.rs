//! Show command implementation

use anyhow::Result;
use bookshelf_core::components::DetailData;
use bookshelf_core::Catalog;
use serde::Serialize;

#[derive(Serialize)]
struct ShownBook<'a> {
    id: &'a str,
    #[serde(flatten)]
    detail: DetailData,
    genres: Vec<&'a str>,
}

/// Print a book's detail data
///
/// An unknown id is not an error: a notice is printed and nothing else happens.
pub fn show(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let Some(book) = catalog.get(id) else {
        tracing::debug!("No book with id {}", id);
        println!("No book with id '{}'", id);
        return Ok(());
    };

    let shown = ShownBook {
        id: &book.id,
        detail: DetailData::for_book(book, catalog),
        genres: book
            .genres
            .iter()
            .map(|genre| catalog.genres().name_or_unknown(genre))
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        println!("Title:       {}", shown.detail.title);
        println!("Subtitle:    {}", shown.detail.subtitle);
        if !shown.genres.is_empty() {
            println!("Genres:      {}", shown.genres.join(", "));
        }
        if !shown.detail.image.is_empty() {
            println!("Image:       {}", shown.detail.image);
        }
        if !shown.detail.description.is_empty() {
            println!("Description: {}", shown.detail.description);
        }
    }

    Ok(())
}
