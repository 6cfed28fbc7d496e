//! Compact clickable summary of one book

use super::{escape_html, Component};
use crate::catalog::Catalog;
use crate::types::{Book, UNKNOWN};

const STYLE: &str = r#"
.preview {
    display: flex;
    gap: 1rem;
    padding: 1rem;
    background: rgb(var(--color-light, 255, 255, 255));
    color: rgb(var(--color-dark, 10, 10, 20));
    border: 1px solid rgba(var(--color-dark, 10, 10, 20), 0.1);
    border-radius: 8px;
    cursor: pointer;
    width: 100%;
    text-align: left;
    text-decoration: none;
    transition: background 0.3s;
}
.preview:hover {
    background: rgba(var(--color-dark, 10, 10, 20), 0.05);
}
.preview__image {
    width: 80px;
    height: 120px;
    object-fit: cover;
    border-radius: 4px;
}
.preview__info {
    display: flex;
    flex-direction: column;
    justify-content: center;
}
.preview__title {
    margin: 0;
    font-size: 1rem;
    font-weight: bold;
}
.preview__author {
    font-size: 0.875rem;
    color: rgba(var(--color-dark, 10, 10, 20), 0.6);
}
"#;

/// Preview card for a single book
///
/// The rendered root carries the book id in `data-preview`; click handling maps
/// that id straight back to the book through [`Catalog::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPreview<'a> {
    id: &'a str,
    title: &'a str,
    author: &'a str,
    image: &'a str,
    href: Option<String>,
}

impl<'a> BookPreview<'a> {
    /// Preview of a catalog book, resolving the author's display name
    pub fn new(book: &'a Book, catalog: &'a Catalog) -> Self {
        Self::from_parts(&book.id, &book.title, catalog.author_name(book), &book.image)
    }

    pub fn from_parts(id: &'a str, title: &'a str, author: &'a str, image: &'a str) -> Self {
        Self {
            id,
            title,
            author,
            image,
            href: None,
        }
    }

    /// Render as a link to `href` instead of a plain button
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn id(&self) -> &str {
        self.id
    }

    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            "No Title"
        } else {
            self.title
        }
    }

    pub fn author(&self) -> &str {
        if self.author.is_empty() {
            UNKNOWN
        } else {
            self.author
        }
    }
}

impl Component for BookPreview<'_> {
    const SCOPE: &'static str = "book-preview";

    fn style() -> &'static str {
        STYLE
    }

    fn render(&self) -> String {
        let title = escape_html(self.title());
        let (open_tag, close_tag) = match &self.href {
            Some(href) => (format!("<a href=\"{}\"", escape_html(href)), "</a>"),
            None => ("<button type=\"button\"".to_string(), "</button>"),
        };

        format!(
            "{open_tag} class=\"preview\" data-scope=\"{scope}\" data-preview=\"{id}\">\
             <img class=\"preview__image\" src=\"{image}\" alt=\"{title}\" />\
             <div class=\"preview__info\">\
             <h3 class=\"preview__title\">{title}</h3>\
             <div class=\"preview__author\">{author}</div>\
             </div>{close_tag}",
            scope = Self::SCOPE,
            id = escape_html(self.id),
            image = escape_html(self.image),
            author = escape_html(self.author()),
        )
    }
}
