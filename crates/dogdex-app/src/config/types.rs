//! Configuration types for dogdex

use serde::{Deserialize, Serialize};

use crate::fuzzy::DEFAULT_THRESHOLD;
use crate::search_box::DEFAULT_MAX_SUGGESTIONS;

/// Page size used by the service when none is configured
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// All user settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub browse: BrowseSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub user: UserSettings,
}

impl Settings {
    /// Clamp out-of-range values back to their defaults
    pub fn sanitized(mut self) -> Self {
        if self.browse.page_size == 0 {
            tracing::warn!("browse.page_size must be positive, using {}", DEFAULT_PAGE_SIZE);
            self.browse.page_size = DEFAULT_PAGE_SIZE;
        }
        if !(0.0..=1.0).contains(&self.search.threshold) {
            tracing::warn!(
                "search.threshold {} is outside 0.0..=1.0, using {}",
                self.search.threshold,
                DEFAULT_THRESHOLD
            );
            self.search.threshold = DEFAULT_THRESHOLD;
        }
        if self.search.max_suggestions == 0 {
            self.search.max_suggestions = DEFAULT_MAX_SUGGESTIONS;
        }
        self
    }
}

/// Remote service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Service root; `None` uses the public service
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BrowseSettings {
    /// Dogs per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Breed search box settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Fuzzy cut-off, 0.0 (exact) to 1.0 (anything)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Suggestions shown under the input
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while favorites exist (they are not saved)
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_true() -> bool {
    true
}

/// Values used to prefill the sign-in form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserSettings {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}
