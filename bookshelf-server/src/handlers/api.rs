//! JSON catalog API

use crate::state::{AppState, BrowseQuery};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use bookshelf_core::components::DetailData;
use bookshelf_core::{filter, Book, Catalog, Lookup, Palette, Theme, ViewState};
use serde::Serialize;

/// Book summary for list responses
#[derive(Debug, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub author_name: String,
    pub image: String,
    pub year: i32,
    pub genres: Vec<String>,
}

impl BookSummary {
    fn new(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            author_name: catalog.author_name(book).to_string(),
            image: book.image.clone(),
            year: book.year(),
            genres: book.genres.clone(),
        }
    }
}

/// One page of matches
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<BookSummary>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub remaining: usize,
    pub has_more: bool,
}

/// List one page of the books matching the query's filters
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Json<ListBooksResponse> {
    let catalog = &state.catalog;
    let matches = filter(catalog, &query.criteria());
    let view = ViewState::at_page(matches, query.page, catalog.page_size());

    let books = view
        .slice(view.page_range(view.page() - 1))
        .iter()
        .map(|book| BookSummary::new(book, catalog))
        .collect();

    Json(ListBooksResponse {
        books,
        total: view.total(),
        page: view.page(),
        per_page: view.page_size(),
        remaining: view.remaining_display(),
        has_more: view.can_show_more(),
    })
}

/// Everything the detail overlay shows, plus resolved genre names
#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    pub id: String,
    #[serde(flatten)]
    pub detail: DetailData,
    pub genres: Vec<String>,
}

/// Get a single book's detail data
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookDetailResponse>, StatusCode> {
    let catalog = &state.catalog;
    let book = catalog.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(BookDetailResponse {
        id: book.id.clone(),
        detail: DetailData::for_book(book, catalog),
        genres: book
            .genres
            .iter()
            .map(|genre| catalog.genres().name_or_unknown(genre).to_string())
            .collect(),
    }))
}

/// An id/name pair from a lookup table
#[derive(Debug, Serialize)]
pub struct LookupEntry {
    pub id: String,
    pub name: String,
}

fn entries(lookup: &Lookup) -> Vec<LookupEntry> {
    lookup
        .iter()
        .map(|(id, name)| LookupEntry {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// All genres, in dataset order
pub async fn list_genres(State(state): State<AppState>) -> Json<Vec<LookupEntry>> {
    Json(entries(state.catalog.genres()))
}

/// All authors, in dataset order
pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<LookupEntry>> {
    Json(entries(state.catalog.authors()))
}

/// A theme's palette and the custom properties it sets
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub palette: Palette,
    pub css: String,
}

pub async fn theme_palette(Path(mode): Path<String>) -> Result<Json<ThemeResponse>, StatusCode> {
    let theme: Theme = mode.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
    let palette = theme.palette();

    Ok(Json(ThemeResponse {
        theme,
        palette,
        css: palette.to_css(),
    }))
}
