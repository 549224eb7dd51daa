//! Service abstraction over the remote dog adoption API
//!
//! The application layer only sees this trait, so tests can swap the HTTP
//! client for the in-memory fake in [`crate::test_utils`].

use dogdex_core::prelude::*;
use dogdex_core::Dog;

use crate::protocol::{SearchPage, SearchQuery};

/// Remote operations used by the browse screen
///
/// Implement [`DogService`] (the `Send` variant); [`LocalDogService`] comes
/// for free.
#[trait_variant::make(DogService: Send)]
pub trait LocalDogService {
    /// Establish the session cookie
    async fn login(&self, name: &str, email: &str) -> Result<()>;

    /// Drop the session cookie on the server side
    async fn logout(&self) -> Result<()>;

    /// Every breed name known to the service
    async fn breeds(&self) -> Result<Vec<String>>;

    /// One page of dog identifiers plus the total match count
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage>;

    /// Hydrate identifiers into full records
    async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>>;

    /// Let the service pick one dog out of the given favorites
    async fn find_match(&self, ids: &[String]) -> Result<String>;
}
