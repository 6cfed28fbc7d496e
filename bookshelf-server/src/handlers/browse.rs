//! HTML page handlers
//!
//! These stand in for the DOM event boundary: the search and settings forms
//! submit here, preview links open a book, and the show-more link (or the
//! fragment endpoint) advances the page.

use crate::state::{AppState, BrowseQuery};
use axum::{
    extract::{Path, Query, State},
    http::{header::HeaderName, HeaderMap, HeaderValue},
    response::{Html, IntoResponse},
};
use bookshelf_core::page::{render_document, render_previews};
use bookshelf_core::{ColorScheme, Event, Location};

/// Client hint carrying the user's `prefers-color-scheme`
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

/// Remaining-count header on appended fragments
pub const X_REMAINING: &str = "x-remaining";

fn color_preference(headers: &HeaderMap) -> Option<ColorScheme> {
    headers
        .get(PREFERS_COLOR_SCHEME)
        .and_then(|value| value.to_str().ok())
        .and_then(ColorScheme::from_hint)
}

/// Ask browsers to send the color-scheme hint on subsequent requests
fn hint_headers() -> [(HeaderName, HeaderValue); 2] {
    [
        (
            HeaderName::from_static("accept-ch"),
            HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
        ),
        (
            HeaderName::from_static("vary"),
            HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
        ),
    ]
}

/// The list view
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let browser = state.browser(&query, color_preference(&headers));
    (hint_headers(), Html(render_document(&browser)))
}

/// The list view with a book's detail overlay open
///
/// Unknown ids render the plain list view.
pub async fn book_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<BrowseQuery>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut browser = state.browser(&query, color_preference(&headers));
    browser.handle(Event::PreviewClicked(Some(id.clone())));

    if browser.active().is_none() {
        tracing::debug!("Preview click for unknown book {}", id);
    }

    (hint_headers(), Html(render_document(&browser)))
}

/// Only the previews the next show-more click appends
pub async fn more_books(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut browser = state.browser(&query, color_preference(&headers));
    let update = browser.handle(Event::ShowMore);
    let location = Location::from_browser(&browser);
    let html = render_previews(update.list.books(), browser.catalog(), &location);

    let remaining = browser.show_more_button().remaining;
    (
        [(
            HeaderName::from_static(X_REMAINING),
            HeaderValue::from(remaining),
        )],
        Html(html),
    )
}
