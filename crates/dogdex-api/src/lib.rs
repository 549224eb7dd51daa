//! # dogdex-api - Dog Adoption Service Client
//!
//! Talks JSON over HTTPS to the remote dog adoption service. The session is a
//! cookie set by the login endpoint and replayed by the client's cookie store.
//!
//! Depends on [`dogdex_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Service Abstraction
//! - [`DogService`] - Async operations the application needs (Send futures)
//! - [`LocalDogService`] - Same trait without the `Send` bound
//!
//! ### HTTP Implementation
//! - [`DogClient`] - reqwest-backed implementation with a cookie store
//!
//! ### Wire Types (`protocol`)
//! - [`SearchQuery`] - Parameters of the paged search endpoint
//! - [`SearchPage`] - One page of identifiers plus the total count
//! - [`LoginRequest`] - Body of the login call

pub mod client;
pub mod protocol;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{DogClient, DEFAULT_BASE_URL};
pub use protocol::{LoginRequest, MatchResponse, SearchPage, SearchQuery};
pub use service::{DogService, LocalDogService};
