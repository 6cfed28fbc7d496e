//! The filter engine: genre, title and author predicates over the catalog

use crate::catalog::Catalog;
use crate::types::Book;
use std::sync::Arc;

/// Form value that selects every genre/author
pub const ANY: &str = "any";

/// A dropdown selection: everything, or one specific id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    /// Interpret a submitted form value; "any" and blank values select everything
    pub fn from_form_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Selection::Any
        } else {
            Selection::Id(value.to_string())
        }
    }

    /// The value to submit back in a form or query string
    pub fn as_form_value(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn selects(&self, id: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Id(selected) => selected == id,
        }
    }
}

impl From<Option<&str>> for Selection {
    fn from(value: Option<&str>) -> Self {
        value.map(Selection::from_form_value).unwrap_or_default()
    }
}

/// The three-field search input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub genre: Selection,
    pub title: String,
    pub author: Selection,
}

impl FilterCriteria {
    /// Criteria that match every book
    pub fn any() -> Self {
        Self::default()
    }

    /// Build criteria from raw search-form fields; missing fields match everything
    pub fn from_form(genre: Option<&str>, title: Option<&str>, author: Option<&str>) -> Self {
        Self {
            genre: genre.into(),
            title: title.unwrap_or_default().to_string(),
            author: author.into(),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Selection::Id(genre.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Selection::Id(author.into());
        self
    }

    /// True when no field narrows the result
    pub fn is_unfiltered(&self) -> bool {
        self.genre.is_any() && self.title.trim().is_empty() && self.author.is_any()
    }

    pub fn genre_matches(&self, book: &Book) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Id(genre) => book.has_genre(genre),
        }
    }

    /// A blank (whitespace-only) query matches everything; otherwise the query is
    /// matched as typed, ignoring case.
    pub fn title_matches(&self, book: &Book) -> bool {
        self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
    }

    pub fn author_matches(&self, book: &Book) -> bool {
        self.author.selects(&book.author)
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.genre_matches(book) && self.title_matches(book) && self.author_matches(book)
    }
}

/// Books matching every predicate, in catalog order
pub fn filter(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Arc<Book>> {
    catalog
        .books()
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Lookup;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        let published = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        genres.iter().fold(Book::new(id, title, author, published), |b, g| {
            b.with_genre(*g)
        })
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                book("1", "Dune", "herbert", &["scifi"]),
                book("2", "Dune Messiah", "herbert", &["scifi"]),
                book("3", "Emma", "austen", &["romance", "classic"]),
                book("4", "Persuasion", "austen", &["romance"]),
                book("5", "Solaris", "lem", &["scifi", "classic"]),
            ],
            Lookup::new().with("herbert", "Frank Herbert").with("austen", "Jane Austen"),
            Lookup::new().with("scifi", "Science Fiction"),
            2,
        )
        .unwrap()
    }

    fn ids(books: &[Arc<Book>]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_any_criteria_returns_everything() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterCriteria::any());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_title_is_case_insensitive() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterCriteria::any().with_title("dUnE"));
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_whitespace_title_matches_everything() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterCriteria::any().with_title("   "));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_combined_predicates() {
        let catalog = catalog();
        let criteria = FilterCriteria::any()
            .with_genre("classic")
            .with_author("austen");
        assert_eq!(ids(&filter(&catalog, &criteria)), vec!["3"]);
    }

    #[test]
    fn test_unknown_genre_matches_nothing() {
        let catalog = catalog();
        let criteria = FilterCriteria::any().with_genre("nonexistent-id");
        assert!(filter(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_results_share_catalog_books() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterCriteria::any().with_author("lem"));
        assert!(Arc::ptr_eq(&result[0], catalog.get("5").unwrap()));
    }

    #[test]
    fn test_form_values() {
        let criteria = FilterCriteria::from_form(Some("any"), None, Some(""));
        assert!(criteria.is_unfiltered());

        let criteria = FilterCriteria::from_form(Some("scifi"), Some("sol"), Some("any"));
        assert_eq!(criteria.genre, Selection::Id("scifi".to_string()));
        assert_eq!(criteria.genre.as_form_value(), "scifi");
        assert_eq!(criteria.author.as_form_value(), ANY);
        assert!(!criteria.is_unfiltered());
    }

    proptest! {
        #[test]
        fn prop_results_satisfy_predicates(
            genre in prop_oneof![Just("any"), Just("scifi"), Just("romance"), Just("classic"), Just("none")],
            author in prop_oneof![Just("any"), Just("herbert"), Just("austen"), Just("lem")],
            title in "[a-zA-Z ]{0,4}",
        ) {
            let catalog = catalog();
            let criteria = FilterCriteria::from_form(Some(genre), Some(title.as_str()), Some(author));
            let result = filter(&catalog, &criteria);

            for book in &result {
                prop_assert!(genre == "any" || book.has_genre(genre));
                prop_assert!(author == "any" || book.author == author);
                prop_assert!(
                    title.trim().is_empty()
                        || book.title.to_lowercase().contains(&title.to_lowercase())
                );
            }

            // Every excluded book fails at least one predicate
            let excluded = catalog
                .books()
                .iter()
                .filter(|b| !result.iter().any(|r| Arc::ptr_eq(r, b)));
            for book in excluded {
                prop_assert!(!criteria.matches(book));
            }
        }

        #[test]
        fn prop_filter_is_idempotent(title in "[a-z]{0,3}") {
            let catalog = catalog();
            let criteria = FilterCriteria::any().with_title(title);
            let first = filter(&catalog, &criteria);
            let second = filter(&catalog, &criteria);
            prop_assert_eq!(ids(&first), ids(&second));
        }
    }
}
