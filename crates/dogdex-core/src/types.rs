//! Domain types shared by every dogdex crate

use serde::{Deserialize, Serialize};

/// Selection value that clears the breed filter
pub const ALL_BREEDS: &str = "all";

// ─────────────────────────────────────────────────────────────────
// Application Phase
// ─────────────────────────────────────────────────────────────────

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// No session cookie yet, the sign-in form is shown
    #[default]
    SignedOut,
    /// Login request in flight
    Authenticating,
    /// Signed in and browsing dogs
    Browsing,
    /// Exit requested
    Quitting,
}

// ─────────────────────────────────────────────────────────────────
// Dog Records
// ─────────────────────────────────────────────────────────────────

/// A single adoptable dog as returned by the batch fetch endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub name: String,
    pub breed: String,
    /// Age in years; `0` is displayed as "Over 1 year"
    pub age: u32,
    /// Image URL
    pub img: String,
    pub zip_code: String,
}

impl Dog {
    /// Human readable age
    pub fn age_label(&self) -> String {
        match self.age {
            0 => "Over 1 year".to_string(),
            1 => "1 year".to_string(),
            n => format!("{n} years"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Query Intent
// ─────────────────────────────────────────────────────────────────

/// Breed sort direction used by the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Wire form of the `sort` query parameter, e.g. `breed:asc`
    pub fn sort_param(&self) -> String {
        format!("breed:{}", self.as_str())
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "A→Z"),
            SortOrder::Desc => write!(f, "Z→A"),
        }
    }
}

/// Breed filter for breed-mode searches
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BreedFilter {
    /// No filter, every breed is returned
    #[default]
    All,
    /// Only dogs of this breed
    Named(String),
}

impl BreedFilter {
    /// Interpret a selection value; `"all"` (any case) and blank clear the filter
    pub fn from_value(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_BREEDS) {
            BreedFilter::All
        } else {
            BreedFilter::Named(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, BreedFilter::All)
    }

    /// The breed name to send as the `breeds` parameter, if any
    pub fn breed(&self) -> Option<&str> {
        match self {
            BreedFilter::All => None,
            BreedFilter::Named(name) => Some(name),
        }
    }
}

impl std::fmt::Display for BreedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreedFilter::All => write!(f, "All breeds"),
            BreedFilter::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Which data source a selection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    Breed,
    Favorites,
    Match,
}

/// The user's current query intent, emitted by the search box
///
/// An empty selection (no key) means "back to the default breed listing".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSelection {
    pub key: Option<SelectionKey>,
    pub value: Option<String>,
    pub page: Option<u32>,
}

impl SearchSelection {
    /// `{}`
    pub fn empty() -> Self {
        Self::default()
    }

    /// `{key: "breed", value}`
    pub fn breed(value: impl Into<String>) -> Self {
        Self {
            key: Some(SelectionKey::Breed),
            value: Some(value.into()),
            page: None,
        }
    }

    /// `{key: "breed", value: "all"}`
    pub fn all_breeds() -> Self {
        Self::breed(ALL_BREEDS)
    }

    /// `{key: "favorites", page}`
    pub fn favorites(page: u32) -> Self {
        Self {
            key: Some(SelectionKey::Favorites),
            value: None,
            page: Some(page),
        }
    }

    /// `{key: "match", value: id}`
    pub fn matched(id: impl Into<String>) -> Self {
        Self {
            key: Some(SelectionKey::Match),
            value: Some(id.into()),
            page: None,
        }
    }
}

/// Which data source currently feeds the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Breed,
    Favorites,
    Match,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Breed => "Browse",
            ViewMode::Favorites => "Favorites",
            ViewMode::Match => "Your match",
        }
    }
}
