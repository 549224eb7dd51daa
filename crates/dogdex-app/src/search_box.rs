//! Breed search box with suggestion dropdown
//!
//! Owns the typed query, the ranked suggestions, the favorites toggle and
//! the sort toggle. User actions return [`SearchEvent`]s; the handler turns
//! those into fetch requests.

use dogdex_core::{BreedFilter, SearchSelection, SortOrder, ViewMode, ALL_BREEDS};

use crate::fuzzy::FuzzyIndex;

/// Default number of suggestions shown under the input
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// What a search box interaction asks the rest of the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Load dogs for this selection
    Select(SearchSelection),
    /// Re-sort the unfiltered listing
    OrderChanged(SortOrder),
    /// Ask the service to pick a match among the favorites
    MatchRequested,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBoxState {
    /// Text in the input
    pub query: String,
    /// Corpus indexes of the current suggestions, best first
    pub results: Vec<usize>,
    /// Position within `results`
    pub highlighted: usize,
    pub dropdown_open: bool,
    /// Favorites toggle
    pub favorites_mode: bool,
    pub order: SortOrder,
    /// Breed filter of the last committed selection
    pub filter: BreedFilter,
    max_suggestions: usize,
}

impl Default for SearchBoxState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUGGESTIONS)
    }
}

impl SearchBoxState {
    pub fn new(max_suggestions: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            highlighted: 0,
            dropdown_open: false,
            favorites_mode: false,
            order: SortOrder::default(),
            filter: BreedFilter::default(),
            max_suggestions: max_suggestions.max(1),
        }
    }

    /// Replace the query text and recompute suggestions
    ///
    /// An empty query clears the suggestions.
    pub fn input(&mut self, index: &FuzzyIndex, text: &str) {
        self.query = text.to_string();
        self.results = index
            .search(text)
            .into_iter()
            .take(self.max_suggestions)
            .map(|m| m.index)
            .collect();
        self.highlighted = 0;
        self.dropdown_open = !self.results.is_empty();
    }

    /// Suggestion labels in display order
    pub fn suggestions<'a>(&self, index: &'a FuzzyIndex) -> Vec<&'a str> {
        self.results.iter().filter_map(|i| index.get(*i)).collect()
    }

    pub fn highlight_next(&mut self) {
        if !self.results.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.results.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if !self.results.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.results.len() - 1);
        }
    }

    /// Choose the suggestion at `position`
    pub fn pick(&mut self, index: &FuzzyIndex, position: usize) -> Option<SearchEvent> {
        let breed = self
            .results
            .get(position)
            .and_then(|i| index.get(*i))?
            .to_string();
        Some(self.commit(&breed))
    }

    /// Enter: commit the highlighted suggestion, or every breed when there
    /// are no suggestions
    pub fn submit(&mut self, index: &FuzzyIndex) -> SearchEvent {
        match self.pick(index, self.highlighted) {
            Some(event) => event,
            None => self.commit(ALL_BREEDS),
        }
    }

    /// Close the dropdown without committing; the query is kept
    pub fn dismiss(&mut self) {
        self.dropdown_open = false;
    }

    /// Flip the favorites toggle
    pub fn toggle_favorites(&mut self) -> SearchEvent {
        self.favorites_mode = !self.favorites_mode;
        self.dropdown_open = false;
        if self.favorites_mode {
            SearchEvent::Select(SearchSelection::favorites(1))
        } else {
            SearchEvent::Select(SearchSelection::empty())
        }
    }

    /// The sort toggle only appears while browsing by breed
    pub fn order_toggle_visible(&self, mode: ViewMode) -> bool {
        mode == ViewMode::Breed
    }

    /// Sorting is only meaningful across all breeds
    pub fn order_toggle_enabled(&self) -> bool {
        self.filter.is_all()
    }

    pub fn toggle_order(&mut self, mode: ViewMode) -> Option<SearchEvent> {
        if !self.order_toggle_visible(mode) || !self.order_toggle_enabled() {
            return None;
        }
        self.order = self.order.toggled();
        Some(SearchEvent::OrderChanged(self.order))
    }

    /// The match button appears in favorites mode once something is favorited
    pub fn match_visible(&self, favorite_count: usize) -> bool {
        self.favorites_mode && favorite_count > 0
    }

    /// Leaves favorites mode and asks for a match
    pub fn request_match(&mut self, favorite_count: usize) -> Option<SearchEvent> {
        if !self.match_visible(favorite_count) {
            return None;
        }
        self.favorites_mode = false;
        Some(SearchEvent::MatchRequested)
    }

    /// Return to the initial state (sign out)
    pub fn reset(&mut self) {
        *self = Self::new(self.max_suggestions);
    }

    fn commit(&mut self, value: &str) -> SearchEvent {
        self.filter = BreedFilter::from_value(value);
        self.query = match &self.filter {
            BreedFilter::All => String::new(),
            BreedFilter::Named(breed) => breed.clone(),
        };
        self.results.clear();
        self.highlighted = 0;
        self.dropdown_open = false;
        self.favorites_mode = false;
        SearchEvent::Select(SearchSelection::breed(value))
    }
}
