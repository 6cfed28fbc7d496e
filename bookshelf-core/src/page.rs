//! Full-document rendering
//!
//! The page is plain HTML that works without scripts: the search and settings
//! overlays are GET forms, previews and the show-more control are links, and
//! [`Location`] carries the browsing state in the query string.

use crate::browser::{Browser, ShowMoreButton};
use crate::catalog::Catalog;
use crate::components::{escape_html, BookPreview, Component};
use crate::filter::{FilterCriteria, Selection, ANY};
use crate::theme::Theme;
use crate::types::{Book, Lookup};
use std::sync::Arc;

/// Empty-state text shown instead of the list
pub const NO_RESULTS: &str = "No results found. Your filters might be too narrow.";

const PAGE_STYLE: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: system-ui, sans-serif;
    background: rgb(var(--color-light));
    color: rgb(var(--color-dark));
}
a { color: inherit; }
.header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    border-bottom: 1px solid rgba(var(--color-dark), 0.1);
}
.header__logo { font-weight: bold; font-size: 1.25rem; }
.header__buttons { display: flex; gap: 1rem; }
.header__button, .list__button, .overlay__button {
    padding: 0.5rem 1rem;
    border-radius: 6px;
    border: 1px solid rgba(var(--color-dark), 0.2);
    background: transparent;
    color: inherit;
    font: inherit;
    text-decoration: none;
    cursor: pointer;
}
.list { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.list__items {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1rem;
}
.list__message { display: none; text-align: center; padding: 4rem 0; }
.list__message_show { display: block; }
.list__button { display: block; width: 100%; margin-top: 2rem; text-align: center; }
.list__button[disabled] { opacity: 0.5; cursor: not-allowed; }
.list__remaining { opacity: 0.6; }
dialog.overlay {
    position: fixed;
    inset: 0;
    margin: auto;
    border: none;
    border-radius: 8px;
    padding: 2rem;
    max-width: 500px;
    background: rgb(var(--color-light));
    color: rgb(var(--color-dark));
}
.overlay__form { display: flex; flex-direction: column; gap: 1rem; }
.overlay__field { display: flex; flex-direction: column; gap: 0.25rem; }
.overlay__input { padding: 0.5rem; font: inherit; }
.overlay__row { display: flex; justify-content: flex-end; gap: 1rem; }
"#;

/// Which form overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Search,
    Settings,
}

impl Overlay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overlay::Search => "search",
            Overlay::Settings => "settings",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "search" => Some(Overlay::Search),
            "settings" => Some(Overlay::Settings),
            _ => None,
        }
    }
}

/// Browsing state as it appears in a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub criteria: FilterCriteria,
    pub page: usize,
    pub theme: Theme,
    pub overlay: Option<Overlay>,
}

impl Location {
    pub fn new(criteria: FilterCriteria, page: usize, theme: Theme) -> Self {
        Self {
            criteria,
            page: page.max(1),
            theme,
            overlay: None,
        }
    }

    /// Location of the browser's current list view (overlays included)
    pub fn from_browser(browser: &Browser) -> Self {
        let overlay = if browser.is_search_open() {
            Some(Overlay::Search)
        } else if browser.is_settings_open() {
            Some(Overlay::Settings)
        } else {
            None
        };
        Self {
            criteria: browser.criteria().clone(),
            page: browser.view().page(),
            theme: browser.theme(),
            overlay,
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn with_overlay(&self, overlay: Option<Overlay>) -> Self {
        Self {
            overlay,
            ..self.clone()
        }
    }

    /// Query parameters, omitting defaults
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Selection::Id(genre) = &self.criteria.genre {
            pairs.push(("genre", genre.clone()));
        }
        if !self.criteria.title.trim().is_empty() {
            pairs.push(("title", self.criteria.title.clone()));
        }
        if let Selection::Id(author) = &self.criteria.author {
            pairs.push(("author", author.clone()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs.push(("theme", self.theme.as_str().to_string()));
        if let Some(overlay) = self.overlay {
            pairs.push(("overlay", overlay.as_str().to_string()));
        }
        pairs
    }

    pub fn to_query(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path?query`
    pub fn href(&self, path: &str) -> String {
        format!("{path}?{}", self.to_query())
    }

    /// The list view with no overlay open
    pub fn list_href(&self) -> String {
        self.with_overlay(None).href("/")
    }

    /// The list view with one more page rendered
    pub fn more_href(&self) -> String {
        self.with_overlay(None).with_page(self.page + 1).href("/")
    }

    /// The list view with a book's detail overlay open
    pub fn book_href(&self, id: &str) -> String {
        self.with_overlay(None)
            .href(&format!("/books/{}", urlencoding::encode(id)))
    }
}

/// Render the previews for `books`, each linking to its detail view
pub fn render_previews(books: &[Arc<Book>], catalog: &Catalog, location: &Location) -> String {
    books
        .iter()
        .map(|book| {
            BookPreview::new(book, catalog)
                .with_href(location.book_href(&book.id))
                .render()
        })
        .collect()
}

/// Render `<option>`s for a lookup, preceded by the "any" option
fn render_options(lookup: &Lookup, any_label: &str, selected: &Selection) -> String {
    let selected_attr = |is_selected: bool| if is_selected { " selected" } else { "" };

    let mut html = format!(
        "<option value=\"{ANY}\"{}>{}</option>",
        selected_attr(selected.is_any()),
        escape_html(any_label)
    );
    for (id, name) in lookup.iter() {
        let is_selected = matches!(selected, Selection::Id(s) if s == id);
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(id),
            selected_attr(is_selected),
            escape_html(name)
        ));
    }
    html
}

fn render_show_more(button: ShowMoreButton, location: &Location) -> String {
    let content = format!(
        "<span>Show more</span> <span class=\"list__remaining\">({})</span>",
        button.remaining
    );
    if button.disabled {
        format!("<button class=\"list__button\" data-list-button disabled>{content}</button>")
    } else {
        format!(
            "<a class=\"list__button\" data-list-button href=\"{}\">{content}</a>",
            escape_html(&location.more_href())
        )
    }
}

fn render_search_overlay(browser: &Browser, location: &Location) -> String {
    let catalog = browser.catalog();
    let criteria = browser.criteria();
    let open = if browser.is_search_open() { " open" } else { "" };
    let autofocus = if browser.is_search_open() {
        " autofocus"
    } else {
        ""
    };

    format!(
        "<dialog class=\"overlay\" data-search-overlay{open}>\
         <form class=\"overlay__form\" data-search-form method=\"get\" action=\"/\">\
         <input type=\"hidden\" name=\"theme\" value=\"{theme}\" />\
         <label class=\"overlay__field\">Title\
         <input class=\"overlay__input\" data-search-title name=\"title\" value=\"{title}\"{autofocus} />\
         </label>\
         <label class=\"overlay__field\">Genre\
         <select class=\"overlay__input\" data-search-genres name=\"genre\">{genres}</select>\
         </label>\
         <label class=\"overlay__field\">Author\
         <select class=\"overlay__input\" data-search-authors name=\"author\">{authors}</select>\
         </label>\
         <div class=\"overlay__row\">\
         <a class=\"overlay__button\" data-search-cancel href=\"{cancel}\">Cancel</a>\
         <button class=\"overlay__button\" type=\"submit\">Search</button>\
         </div></form></dialog>",
        theme = browser.theme().as_str(),
        title = escape_html(&criteria.title),
        genres = render_options(catalog.genres(), "All Genres", &criteria.genre),
        authors = render_options(catalog.authors(), "All Authors", &criteria.author),
        cancel = escape_html(&location.list_href()),
    )
}

fn render_settings_overlay(browser: &Browser, location: &Location) -> String {
    let open = if browser.is_settings_open() {
        " open"
    } else {
        ""
    };
    // Settings submit must keep the current search and page
    let hidden: String = location
        .with_overlay(None)
        .query_pairs()
        .into_iter()
        .filter(|(key, _)| *key != "theme")
        .map(|(key, value)| {
            format!(
                "<input type=\"hidden\" name=\"{key}\" value=\"{}\" />",
                escape_html(&value)
            )
        })
        .collect();
    let option = |theme: Theme, label: &str| {
        let selected = if browser.theme() == theme {
            " selected"
        } else {
            ""
        };
        format!(
            "<option value=\"{}\"{selected}>{label}</option>",
            theme.as_str()
        )
    };

    format!(
        "<dialog class=\"overlay\" data-settings-overlay{open}>\
         <form class=\"overlay__form\" data-settings-form method=\"get\" action=\"/\">\
         {hidden}\
         <label class=\"overlay__field\">Theme\
         <select class=\"overlay__input\" data-settings-theme name=\"theme\">{day}{night}</select>\
         </label>\
         <div class=\"overlay__row\">\
         <a class=\"overlay__button\" data-settings-cancel href=\"{cancel}\">Cancel</a>\
         <button class=\"overlay__button\" type=\"submit\">Save</button>\
         </div></form></dialog>",
        day = option(Theme::Day, "Day"),
        night = option(Theme::Night, "Night"),
        cancel = escape_html(&location.list_href()),
    )
}

/// Render the complete document for the browser's current state
///
/// The list shows everything rendered so far (all pages up to the current one).
pub fn render_document(browser: &Browser) -> String {
    let location = Location::from_browser(browser);
    let catalog = browser.catalog();
    let view = browser.view();

    let message_class = if browser.shows_empty_message() {
        "list__message list__message_show"
    } else {
        "list__message"
    };
    let detail = browser
        .detail()
        .clone()
        .with_close_href(location.list_href())
        .render();
    let search_href = location.with_overlay(Some(Overlay::Search)).href("/");
    let settings_href = location.with_overlay(Some(Overlay::Settings)).href("/");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>Bookshelf</title>\n\
         <style>\n:root {{ {palette} }}\n{page_style}{preview_style}{detail_style}</style>\n\
         </head>\n<body>\n\
         <header class=\"header\"><span class=\"header__logo\">Bookshelf</span>\
         <div class=\"header__buttons\">\
         <a class=\"header__button\" data-header-search href=\"{search_href}\">Search</a>\
         <a class=\"header__button\" data-header-settings href=\"{settings_href}\">Settings</a>\
         </div></header>\n\
         <main class=\"list\">\n\
         <div class=\"list__items\" data-list-items>{previews}</div>\n\
         <div class=\"{message_class}\" data-list-message>{NO_RESULTS}</div>\n\
         {show_more}\n\
         {detail}\n\
         </main>\n\
         {search}\n{settings}\n\
         </body>\n</html>\n",
        palette = browser.theme().palette().to_css(),
        page_style = PAGE_STYLE,
        preview_style = BookPreview::scoped_style(),
        detail_style = crate::components::BookDetail::scoped_style(),
        search_href = escape_html(&search_href),
        settings_href = escape_html(&settings_href),
        previews = render_previews(view.rendered(), catalog, &location),
        show_more = render_show_more(browser.show_more_button(), &location),
        search = render_search_overlay(browser, &location),
        settings = render_settings_overlay(browser, &location),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::Event;

    fn sample_browser() -> Browser {
        Browser::new(Arc::new(Catalog::sample().unwrap()), Theme::Day)
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn test_location_query() {
        let criteria = FilterCriteria::any().with_genre("g-scifi").with_title("the end");
        let location = Location::new(criteria, 2, Theme::Night);
        assert_eq!(
            location.to_query(),
            "genre=g-scifi&title=the%20end&page=2&theme=night"
        );
        assert_eq!(
            location.more_href(),
            "/?genre=g-scifi&title=the%20end&page=3&theme=night"
        );
        assert_eq!(
            location.book_href("b-1"),
            "/books/b-1?genre=g-scifi&title=the%20end&page=2&theme=night"
        );
    }

    #[test]
    fn test_location_omits_defaults() {
        let location = Location::new(FilterCriteria::any(), 0, Theme::Day);
        assert_eq!(location.page, 1);
        assert_eq!(location.list_href(), "/?theme=day");
        assert_eq!(
            location.with_overlay(Some(Overlay::Search)).href("/"),
            "/?theme=day&overlay=search"
        );
    }

    #[test]
    fn test_initial_document() {
        let browser = sample_browser();
        let html = render_document(&browser);

        assert_eq!(count(&html, "data-preview=\""), 6);
        assert!(html.contains("<div class=\"list__message\" data-list-message>"));
        assert!(html.contains("<span class=\"list__remaining\">(8)</span>"));
        assert!(html.contains("--color-dark: 10, 10, 20;"));
        assert!(html.contains("<option value=\"any\" selected>All Genres</option>"));
        assert!(html.contains("<option value=\"any\" selected>All Authors</option>"));
        assert!(!html.contains("data-search-overlay open"));
        assert!(!html.contains("data-list-active open"));
    }

    #[test]
    fn test_show_more_renders_cumulatively() {
        let mut browser = sample_browser();
        browser.handle(Event::ShowMore);
        browser.handle(Event::ShowMore);
        let html = render_document(&browser);

        assert_eq!(count(&html, "data-preview=\""), 14);
        assert!(html.contains("data-list-button disabled"));
        assert!(html.contains("<span class=\"list__remaining\">(0)</span>"));
    }

    #[test]
    fn test_empty_state_document() {
        let mut browser = sample_browser();
        browser.handle(Event::SearchSubmitted(
            FilterCriteria::any().with_genre("nonexistent-id"),
        ));
        let html = render_document(&browser);

        assert_eq!(count(&html, "data-preview=\""), 0);
        assert!(html.contains("list__message list__message_show"));
        assert!(html.contains(NO_RESULTS));
    }

    #[test]
    fn test_selected_filters_are_preselected() {
        let mut browser = sample_browser();
        browser.handle(Event::SearchSubmitted(
            FilterCriteria::any()
                .with_genre("g-fantasy")
                .with_author("a-tolkien")
                .with_title("\"ring\""),
        ));
        browser.handle(Event::OpenSearch);
        let html = render_document(&browser);

        assert!(html.contains("<option value=\"g-fantasy\" selected>Fantasy</option>"));
        assert!(html.contains("<option value=\"a-tolkien\" selected>J. R. R. Tolkien</option>"));
        assert!(html.contains("value=\"&quot;ring&quot;\" autofocus"));
        assert!(html.contains("data-search-overlay open"));
    }

    #[test]
    fn test_detail_overlay_in_document() {
        let mut browser = sample_browser();
        browser.handle(Event::PreviewClicked(Some("b-0001".to_string())));
        let html = render_document(&browser);

        assert!(html.contains("data-list-active open"));
        assert!(html.contains("<div class=\"modal__subtitle\">Frank Herbert (1965)</div>"));
        assert!(html.contains("href=\"/?theme=day\">&times;</a>"));
    }

    #[test]
    fn test_settings_form_keeps_search() {
        let mut browser = sample_browser();
        browser.handle(Event::SearchSubmitted(FilterCriteria::any().with_title("dune")));
        browser.handle(Event::OpenSettings);
        let html = render_document(&browser);

        assert!(html.contains("data-settings-overlay open"));
        assert!(html.contains("<input type=\"hidden\" name=\"title\" value=\"dune\" />"));
        assert!(html.contains("<option value=\"day\" selected>Day</option>"));
    }

    #[test]
    fn test_night_theme_document() {
        let mut browser = sample_browser();
        browser.handle(Event::SettingsSubmitted(Theme::Night));
        let html = render_document(&browser);
        assert!(html.contains(":root { --color-dark: 255, 255, 255; --color-light: 10, 10, 20; }"));
    }
}
