//! Fetch orchestration
//!
//! Turns a [`FetchParams`] into a [`Query`] and then into a [`FetchPlan`]
//! the action layer can execute. Every plan carries a [`RequestId`]; only
//! the completion for the latest id is applied, so a slow response for an
//! old query can never overwrite a newer one.

use dogdex_api::SearchQuery;
use dogdex_core::prelude::*;
use dogdex_core::{BreedFilter, SearchSelection, SelectionKey, SortOrder, ViewMode};

use crate::favorites::FavoriteSet;

/// Monotonic identifier of an issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Loosely-typed request coming from the UI
///
/// Missing fields fall back to the last remembered filter and order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchParams {
    pub key: Option<SelectionKey>,
    pub value: Option<String>,
    /// Explicit zero-based offset (breed mode)
    pub from: Option<u64>,
    /// 1-based page; also derives the offset when `from` is absent
    pub page: Option<u32>,
    pub order: Option<SortOrder>,
}

impl FetchParams {
    /// Params for a search box selection; lands on page 1 unless the
    /// selection names a page
    pub fn from_selection(selection: &SearchSelection) -> Self {
        Self {
            key: selection.key,
            value: selection.value.clone(),
            from: None,
            page: Some(selection.page.unwrap_or(1)),
            order: None,
        }
    }

    /// First listing after sign-in: every breed, ascending, page 1
    pub fn initial() -> Self {
        Self::from_selection(&SearchSelection::empty())
    }

    /// Re-sort the breed listing from page 1
    pub fn reorder(order: SortOrder) -> Self {
        Self {
            key: Some(SelectionKey::Breed),
            order: Some(order),
            page: Some(1),
            ..Self::default()
        }
    }

    /// Move to `page` within the current view
    pub fn page_change(mode: ViewMode, page: u32) -> Option<Self> {
        let key = match mode {
            ViewMode::Breed => SelectionKey::Breed,
            ViewMode::Favorites => SelectionKey::Favorites,
            ViewMode::Match => return None,
        };
        Some(Self {
            key: Some(key),
            page: Some(page),
            ..Self::default()
        })
    }
}

/// Resolved query, one variant per data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Breed {
        filter: BreedFilter,
        order: SortOrder,
        from: u64,
    },
    Favorites {
        page: u32,
    },
    Match {
        id: String,
    },
}

impl Query {
    pub fn mode(&self) -> ViewMode {
        match self {
            Query::Breed { .. } => ViewMode::Breed,
            Query::Favorites { .. } => ViewMode::Favorites,
            Query::Match { .. } => ViewMode::Match,
        }
    }
}

/// Work the action layer has to do for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Search for a page of ids, then hydrate them
    Search {
        request_id: RequestId,
        query: SearchQuery,
    },
    /// Hydrate a known list of ids
    Hydrate {
        request_id: RequestId,
        mode: ViewMode,
        ids: Vec<String>,
        total: u64,
    },
    /// Nothing to fetch; show an empty gallery
    Clear {
        request_id: RequestId,
        mode: ViewMode,
    },
}

impl FetchPlan {
    pub fn request_id(&self) -> RequestId {
        match self {
            FetchPlan::Search { request_id, .. }
            | FetchPlan::Hydrate { request_id, .. }
            | FetchPlan::Clear { request_id, .. } => *request_id,
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            FetchPlan::Search { .. } => ViewMode::Breed,
            FetchPlan::Hydrate { mode, .. } | FetchPlan::Clear { mode, .. } => *mode,
        }
    }
}

/// Remembers the last breed query and hands out request ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOrchestrator {
    page_size: u32,
    last_filter: BreedFilter,
    last_order: SortOrder,
    mode: ViewMode,
    latest: RequestId,
}

impl FetchOrchestrator {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            last_filter: BreedFilter::All,
            last_order: SortOrder::Asc,
            mode: ViewMode::Breed,
            latest: RequestId::default(),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn last_filter(&self) -> &BreedFilter {
        &self.last_filter
    }

    pub fn last_order(&self) -> SortOrder {
        self.last_order
    }

    /// Id of the most recently issued plan
    pub fn latest(&self) -> RequestId {
        self.latest
    }

    /// Whether a completion for `id` should still be applied
    pub fn is_current(&self, id: RequestId) -> bool {
        id == self.latest
    }

    /// Resolve params into a query, remembering breed filter and order
    ///
    /// Returns `None` for a match request without an id.
    pub fn resolve(&mut self, params: &FetchParams) -> Option<Query> {
        match params.key.unwrap_or(SelectionKey::Breed) {
            SelectionKey::Breed => {
                if let Some(value) = params.value.as_deref() {
                    self.last_filter = BreedFilter::from_value(value);
                }
                if let Some(order) = params.order {
                    self.last_order = order;
                }
                let from = params.from.unwrap_or_else(|| {
                    u64::from(params.page.unwrap_or(1).saturating_sub(1))
                        * u64::from(self.page_size)
                });
                Some(Query::Breed {
                    filter: self.last_filter.clone(),
                    order: self.last_order,
                    from,
                })
            }
            SelectionKey::Favorites => Some(Query::Favorites {
                page: params.page.unwrap_or(1).max(1),
            }),
            SelectionKey::Match => match params.value.as_deref() {
                Some(id) if !id.is_empty() => Some(Query::Match { id: id.to_string() }),
                _ => {
                    warn!("Match fetch requested without a dog id");
                    None
                }
            },
        }
    }

    /// Resolve params and issue a plan with a fresh request id
    ///
    /// The view mode switches as soon as the plan is issued.
    pub fn plan(&mut self, params: &FetchParams, favorites: &FavoriteSet) -> Option<FetchPlan> {
        let query = self.resolve(params)?;
        let request_id = self.issue();
        self.mode = query.mode();

        let plan = match query {
            Query::Breed {
                filter,
                order,
                from,
            } => FetchPlan::Search {
                request_id,
                query: SearchQuery {
                    breed: filter.breed().map(str::to_string),
                    size: self.page_size,
                    from,
                    order,
                },
            },
            Query::Favorites { page } => {
                if favorites.is_empty() {
                    FetchPlan::Clear {
                        request_id,
                        mode: ViewMode::Favorites,
                    }
                } else {
                    FetchPlan::Hydrate {
                        request_id,
                        mode: ViewMode::Favorites,
                        ids: favorites.page(page, self.page_size),
                        total: favorites.len() as u64,
                    }
                }
            }
            Query::Match { id } => FetchPlan::Hydrate {
                request_id,
                mode: ViewMode::Match,
                ids: vec![id],
                total: 1,
            },
        };

        debug!("Issued fetch {} for {:?}", request_id, self.mode);
        Some(plan)
    }

    /// Forget remembered filter and order (sign out)
    pub fn reset(&mut self) {
        let latest = self.latest;
        *self = Self::new(self.page_size);
        // Keep the sequence so late completions from the old session are dropped
        self.latest = latest;
        self.issue();
    }

    fn issue(&mut self) -> RequestId {
        self.latest = RequestId(self.latest.0 + 1);
        self.latest
    }
}
