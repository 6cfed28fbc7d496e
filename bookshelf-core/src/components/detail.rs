//! Modal overlay showing one book's full metadata

use super::{escape_html, Component};
use crate::catalog::Catalog;
use crate::types::Book;
use serde::Serialize;

const STYLE: &str = r#"
:host {
    position: fixed;
    top: 0;
    left: 0;
    width: 100vw;
    height: 100vh;
    display: none;
    z-index: 100;
    background-color: rgba(0, 0, 0, 0.7);
    justify-content: center;
    align-items: center;
}
:host([open]) {
    display: flex;
}
.overlay__blur {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: blur(10px);
    opacity: 0.4;
}
.modal {
    background: rgb(var(--color-light, 255, 255, 255));
    color: rgb(var(--color-dark, 10, 10, 20));
    border-radius: 8px;
    max-width: 800px;
    width: 90%;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 2rem;
    position: relative;
}
.modal__image {
    max-width: 100%;
    height: auto;
    border-radius: 4px;
}
.modal__close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: transparent;
    border: none;
    color: inherit;
    font-size: 1.5rem;
    text-decoration: none;
    cursor: pointer;
}
.modal__title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: bold;
}
.modal__subtitle {
    font-size: 1rem;
    color: rgba(var(--color-dark, 10, 10, 20), 0.6);
}
.modal__description {
    font-size: 0.95rem;
    line-height: 1.6;
}
"#;

/// `"<author name> (<year>)"`
pub fn subtitle(author: &str, year: i32) -> String {
    format!("{author} ({year})")
}

/// Everything the overlay displays
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailData {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

impl DetailData {
    /// Detail data for a catalog book; the subtitle combines author and year
    pub fn for_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: subtitle(catalog.author_name(book), book.year()),
            description: book.description.clone(),
        }
    }
}

/// The detail overlay
///
/// Visibility is an attribute: the root renders `open` only while the overlay
/// is shown, and the scoped stylesheet hides the root otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDetail {
    data: DetailData,
    open: bool,
    close_href: Option<String>,
}

impl BookDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed data (does not change visibility)
    pub fn set_data(&mut self, data: DetailData) {
        self.data = data;
    }

    pub fn data(&self) -> &DetailData {
        &self.data
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Render the close control as a link to `href` instead of a plain button
    pub fn with_close_href(mut self, href: impl Into<String>) -> Self {
        self.close_href = Some(href.into());
        self
    }
}

impl Component for BookDetail {
    const SCOPE: &'static str = "book-detail";

    fn style() -> &'static str {
        STYLE
    }

    fn render(&self) -> String {
        let open_attr = if self.open { " open" } else { "" };
        let close = match &self.close_href {
            Some(href) => format!(
                "<a class=\"modal__close\" title=\"Close\" href=\"{}\">&times;</a>",
                escape_html(href)
            ),
            None => {
                "<button type=\"button\" class=\"modal__close\" title=\"Close\">&times;</button>"
                    .to_string()
            }
        };
        let image = escape_html(&self.data.image);
        let title = escape_html(&self.data.title);

        format!(
            "<div class=\"overlay\" data-scope=\"{scope}\" data-list-active{open_attr}>\
             <img class=\"overlay__blur\" src=\"{image}\" alt=\"\" />\
             <div class=\"modal\">{close}\
             <img class=\"modal__image\" src=\"{image}\" alt=\"{title}\" />\
             <h3 class=\"modal__title\">{title}</h3>\
             <div class=\"modal__subtitle\">{subtitle}</div>\
             <p class=\"modal__description\">{description}</p>\
             </div></div>",
            scope = Self::SCOPE,
            subtitle = escape_html(&self.data.subtitle),
            description = escape_html(&self.data.description),
        )
    }
}
