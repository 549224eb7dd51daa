//! Wire types and endpoint paths of the dog adoption service

use dogdex_core::SortOrder;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Endpoints (relative to the base URL)
// ─────────────────────────────────────────────────────────────────

pub const LOGIN_PATH: &str = "auth/login";
pub const LOGOUT_PATH: &str = "auth/logout";
pub const BREEDS_PATH: &str = "dogs/breeds";
pub const SEARCH_PATH: &str = "dogs/search";
pub const DOGS_PATH: &str = "dogs";
pub const MATCH_PATH: &str = "dogs/match";

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
}

/// Parameters of `GET /dogs/search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Restrict results to this breed; `None` searches every breed
    pub breed: Option<String>,
    /// Page size
    pub size: u32,
    /// Zero-based result offset
    pub from: u64,
    /// Sort direction on the breed field
    pub order: SortOrder,
}

impl SearchQuery {
    /// Query-string pairs in the order the service documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("size", self.size.to_string()),
            ("sort", self.order.sort_param()),
        ];
        if let Some(ref breed) = self.breed {
            pairs.push(("breeds", breed.clone()));
        }
        pairs.push(("from", self.from.to_string()));
        pairs
    }
}

/// Response of `GET /dogs/search`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub result_ids: Vec<String>,
    pub total: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Response of `POST /dogs/match`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "match")]
    pub matched: String,
}
