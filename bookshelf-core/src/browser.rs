//! The application controller
//!
//! `Browser` owns all mutable UI state (the current [`ViewState`], the active
//! book, overlay flags and the theme) and turns UI events into state
//! transitions. Each event returns an [`Update`] describing what the surface
//! should change: replace or append to the list, refresh the show-more
//! control, scroll, focus.

use crate::catalog::Catalog;
use crate::components::{BookDetail, DetailData};
use crate::filter::FilterCriteria;
use crate::theme::Theme;
use crate::types::Book;
use crate::view::ViewState;
use std::sync::Arc;

/// A user-initiated event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Search form submitted
    SearchSubmitted(FilterCriteria),
    /// Show-more button clicked
    ShowMore,
    /// A click in the list; carries the `data-preview` id if a preview was hit
    PreviewClicked(Option<String>),
    /// Detail overlay close control clicked
    CloseDetail,
    /// Header search button clicked
    OpenSearch,
    /// Search overlay cancelled
    CancelSearch,
    /// Header settings button clicked
    OpenSettings,
    /// Settings overlay cancelled
    CancelSettings,
    /// Settings form submitted
    SettingsSubmitted(Theme),
}

/// How the rendered list changes
#[derive(Debug, Clone, Default)]
pub enum ListUpdate {
    #[default]
    Unchanged,
    /// Clear the list, then render these
    Replace(Vec<Arc<Book>>),
    /// Append these below what is already rendered
    Append(Vec<Arc<Book>>),
}

impl ListUpdate {
    pub fn books(&self) -> &[Arc<Book>] {
        match self {
            ListUpdate::Unchanged => &[],
            ListUpdate::Replace(books) | ListUpdate::Append(books) => books,
        }
    }
}

/// State of the show-more control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMoreButton {
    pub remaining: usize,
    pub disabled: bool,
}

impl ShowMoreButton {
    pub fn for_view(view: &ViewState) -> Self {
        Self {
            remaining: view.remaining_display(),
            disabled: !view.can_show_more(),
        }
    }

    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// What a handled event changed
#[derive(Debug, Clone, Default)]
pub struct Update {
    pub list: ListUpdate,
    /// New show-more state, when it changed
    pub show_more: Option<ShowMoreButton>,
    /// Whether the empty-state message is shown, when it changed
    pub empty_message: Option<bool>,
    pub scroll_to_top: bool,
    pub focus_search: bool,
}

pub struct Browser {
    catalog: Arc<Catalog>,
    view: ViewState,
    criteria: FilterCriteria,
    active: Option<Arc<Book>>,
    detail: BookDetail,
    search_open: bool,
    settings_open: bool,
    theme: Theme,
}

impl Browser {
    /// Initial state: the whole catalog, first page, all overlays closed
    pub fn new(catalog: Arc<Catalog>, theme: Theme) -> Self {
        let view = ViewState::initial(&catalog);
        Self {
            catalog,
            view,
            criteria: FilterCriteria::any(),
            active: None,
            detail: BookDetail::new(),
            search_open: false,
            settings_open: false,
            theme,
        }
    }

    /// Update for the first render: the first page and the show-more state
    pub fn initial_update(&self) -> Update {
        Update {
            list: ListUpdate::Replace(self.view.first_page().to_vec()),
            show_more: Some(ShowMoreButton::for_view(&self.view)),
            empty_message: Some(self.view.is_empty()),
            ..Update::default()
        }
    }

    pub fn handle(&mut self, event: Event) -> Update {
        match event {
            Event::SearchSubmitted(criteria) => self.search(criteria),
            Event::ShowMore => self.show_more(),
            Event::PreviewClicked(id) => {
                self.select(id.as_deref());
                Update::default()
            }
            Event::CloseDetail => {
                self.close_detail();
                Update::default()
            }
            Event::OpenSearch => {
                self.search_open = true;
                Update {
                    focus_search: true,
                    ..Update::default()
                }
            }
            Event::CancelSearch => {
                self.search_open = false;
                Update::default()
            }
            Event::OpenSettings => {
                self.settings_open = true;
                Update::default()
            }
            Event::CancelSettings => {
                self.settings_open = false;
                Update::default()
            }
            Event::SettingsSubmitted(theme) => {
                self.theme = theme;
                self.settings_open = false;
                Update::default()
            }
        }
    }

    fn search(&mut self, criteria: FilterCriteria) -> Update {
        let view = std::mem::replace(&mut self.view, ViewState::new(Vec::new(), 1));
        self.view = view.filtered(&self.catalog, &criteria);
        self.criteria = criteria;
        self.search_open = false;

        tracing::debug!(
            "Search matched {} of {} books",
            self.view.total(),
            self.catalog.len()
        );

        Update {
            list: ListUpdate::Replace(self.view.first_page().to_vec()),
            show_more: Some(ShowMoreButton::for_view(&self.view)),
            empty_message: Some(self.view.is_empty()),
            scroll_to_top: true,
            focus_search: false,
        }
    }

    fn show_more(&mut self) -> Update {
        let view = std::mem::replace(&mut self.view, ViewState::new(Vec::new(), 1));
        let (view, range) = view.show_more();
        self.view = view;

        Update {
            list: ListUpdate::Append(self.view.slice(range).to_vec()),
            show_more: Some(ShowMoreButton::for_view(&self.view)),
            ..Update::default()
        }
    }

    /// Activate the book with the given preview id and open the overlay
    ///
    /// Ids that do not resolve leave the active book and overlay untouched.
    fn select(&mut self, id: Option<&str>) {
        let Some(book) = id.and_then(|id| self.catalog.get(id)).cloned() else {
            return;
        };
        self.detail
            .set_data(DetailData::for_book(&book, &self.catalog));
        self.detail.open();
        self.active = Some(book);
    }

    /// Submit `criteria`, then click show-more until `pages` pages are rendered
    /// or the matches run out (0 pages is treated as 1)
    pub fn replay(&mut self, criteria: FilterCriteria, pages: usize) {
        self.handle(Event::SearchSubmitted(criteria));
        for _ in 1..pages.max(1) {
            if !self.view.can_show_more() {
                break;
            }
            self.handle(Event::ShowMore);
        }
    }

    /// Close the detail overlay (programmatic equivalent of the close control)
    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The most recently clicked book, if any
    pub fn active(&self) -> Option<&Arc<Book>> {
        self.active.as_ref()
    }

    pub fn detail(&self) -> &BookDetail {
        &self.detail
    }

    pub fn show_more_button(&self) -> ShowMoreButton {
        ShowMoreButton::for_view(&self.view)
    }

    pub fn shows_empty_message(&self) -> bool {
        self.view.is_empty()
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}
