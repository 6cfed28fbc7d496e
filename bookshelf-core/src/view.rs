//! Pagination over the current match set
//!
//! `ViewState` is a plain value: transitions consume the old state and return
//! the new one, so the controller threads it explicitly instead of mutating
//! shared page/match variables.

use crate::catalog::Catalog;
use crate::filter::{filter, FilterCriteria};
use crate::types::Book;
use std::ops::Range;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ViewState {
    /// 1-based count of pages rendered so far
    page: usize,
    page_size: usize,
    matches: Vec<Arc<Book>>,
}

impl ViewState {
    /// First page over the given matches
    pub fn new(matches: Vec<Arc<Book>>, page_size: usize) -> Self {
        Self::at_page(matches, 1, page_size)
    }

    /// The whole catalog, first page
    pub fn initial(catalog: &Catalog) -> Self {
        Self::new(catalog.books().to_vec(), catalog.page_size())
    }

    /// Restore a state with `page` pages already rendered (page 0 is treated as 1)
    pub fn at_page(matches: Vec<Arc<Book>>, page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            matches,
        }
    }

    /// State after a new search: matches replaced, back to page 1
    pub fn filtered(self, catalog: &Catalog, criteria: &FilterCriteria) -> Self {
        Self::new(filter(catalog, criteria), self.page_size)
    }

    /// Advance one page, returning the index range to append
    ///
    /// When nothing remains the state is returned unchanged with an empty range.
    pub fn show_more(self) -> (Self, Range<usize>) {
        if !self.can_show_more() {
            let end = self.matches.len();
            return (self, end..end);
        }
        let range = self.page_range(self.page);
        let next = Self {
            page: self.page + 1,
            ..self
        };
        (next, range)
    }

    /// Index range of the page with the given 0-based index, clamped to the matches
    pub fn page_range(&self, index: usize) -> Range<usize> {
        let len = self.matches.len();
        let start = index.saturating_mul(self.page_size).min(len);
        let end = (index.saturating_add(1))
            .saturating_mul(self.page_size)
            .min(len);
        start..end
    }

    pub fn slice(&self, range: Range<usize>) -> &[Arc<Book>] {
        &self.matches[range]
    }

    pub fn first_page(&self) -> &[Arc<Book>] {
        self.slice(self.page_range(0))
    }

    /// Everything rendered so far, across all pages
    pub fn rendered(&self) -> &[Arc<Book>] {
        &self.matches[..self.rendered_count()]
    }

    pub fn rendered_count(&self) -> usize {
        self.matches
            .len()
            .min(self.page.saturating_mul(self.page_size))
    }

    /// Matches not yet rendered; zero or negative once everything is shown
    pub fn remaining(&self) -> isize {
        // A saturated product must stay positive when narrowed
        let shown = self
            .page
            .saturating_mul(self.page_size)
            .min(isize::MAX as usize);
        self.matches.len() as isize - shown as isize
    }

    /// Remaining count as displayed, never below zero
    pub fn remaining_display(&self) -> usize {
        self.remaining().max(0) as usize
    }

    pub fn can_show_more(&self) -> bool {
        self.remaining() > 0
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn matches(&self) -> &[Arc<Book>] {
        &self.matches
    }

    pub fn total(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
