//! Test utilities for the service layer
//!
//! Provides an in-memory [`FakeDogService`] that answers like the real
//! service and records every call, plus helpers for creating test dogs.

use std::collections::HashSet;
use std::sync::Mutex;

use dogdex_core::prelude::*;
use dogdex_core::{Dog, SortOrder};

use crate::protocol::{SearchPage, SearchQuery};
use crate::service::DogService;

/// Creates a test dog with basic defaults.
///
/// # Arguments
/// * `id` - Dog identifier
/// * `name` - Dog name
/// * `breed` - Breed name
pub fn test_dog(id: &str, name: &str, breed: &str) -> Dog {
    Dog {
        id: id.to_string(),
        name: name.to_string(),
        breed: breed.to_string(),
        age: 2,
        img: format!("https://images.example/{id}.jpg"),
        zip_code: "02134".to_string(),
    }
}

/// Creates `count` dogs named `dog-0..` cycling through the given breeds.
pub fn test_kennel(count: usize, breeds: &[&str]) -> Vec<Dog> {
    (0..count)
        .map(|i| {
            let breed = breeds[i % breeds.len().max(1)];
            test_dog(&format!("dog-{i}"), &format!("Dog {i}"), breed)
        })
        .collect()
}

/// A call observed by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login { name: String, email: String },
    Logout,
    Breeds,
    Search(SearchQuery),
    Dogs(Vec<String>),
    Match(Vec<String>),
}

/// Endpoint the fake should fail on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailPoint {
    Login,
    Breeds,
    Search,
    Dogs,
    Match,
}

#[derive(Debug, Default)]
struct FakeState {
    dogs: Vec<Dog>,
    calls: Vec<ApiCall>,
    failing: HashSet<FailPoint>,
    match_id: Option<String>,
    /// Session cookie rejected until the next login
    expired: bool,
}

/// In-memory stand-in for the remote service
#[derive(Debug, Default)]
pub struct FakeDogService {
    state: Mutex<FakeState>,
}

impl FakeDogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the kennel
    pub fn with_dogs(dogs: Vec<Dog>) -> Self {
        let fake = Self::new();
        fake.lock().dogs = dogs;
        fake
    }

    /// Make one endpoint return an error from now on
    pub fn fail_on(&self, point: FailPoint) {
        self.lock().failing.insert(point);
    }

    /// Stop failing an endpoint
    pub fn recover(&self, point: FailPoint) {
        self.lock().failing.remove(&point);
    }

    /// Reject every authenticated call with 401 until the next login
    pub fn expire_session(&self) {
        self.lock().expired = true;
    }

    /// Force the match endpoint to answer with this id
    pub fn set_match(&self, id: &str) {
        self.lock().match_id = Some(id.to_string());
    }

    /// Every call seen so far, oldest first
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Count of recorded network calls
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: ApiCall, point: Option<FailPoint>) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(call);
        match point {
            Some(FailPoint::Login) if !state.failing.contains(&FailPoint::Login) => {
                state.expired = false;
                Ok(())
            }
            Some(_) if state.expired => Err(Error::NotAuthenticated),
            Some(p) if state.failing.contains(&p) => {
                Err(Error::http(format!("simulated {p:?} failure")))
            }
            _ => Ok(()),
        }
    }
}

impl DogService for FakeDogService {
    async fn login(&self, name: &str, email: &str) -> Result<()> {
        self.record(
            ApiCall::Login {
                name: name.to_string(),
                email: email.to_string(),
            },
            Some(FailPoint::Login),
        )
    }

    async fn logout(&self) -> Result<()> {
        self.record(ApiCall::Logout, None)
    }

    async fn breeds(&self) -> Result<Vec<String>> {
        self.record(ApiCall::Breeds, Some(FailPoint::Breeds))?;
        let mut breeds: Vec<String> = self.lock().dogs.iter().map(|d| d.breed.clone()).collect();
        breeds.sort();
        breeds.dedup();
        Ok(breeds)
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        self.record(ApiCall::Search(query.clone()), Some(FailPoint::Search))?;
        let state = self.lock();
        let mut matching: Vec<&Dog> = state
            .dogs
            .iter()
            .filter(|d| query.breed.as_deref().map_or(true, |b| d.breed == b))
            .collect();
        matching.sort_by(|a, b| a.breed.cmp(&b.breed).then(a.id.cmp(&b.id)));
        if query.order == SortOrder::Desc {
            matching.reverse();
        }
        let total = matching.len() as u64;
        let result_ids = matching
            .into_iter()
            .skip(query.from as usize)
            .take(query.size as usize)
            .map(|d| d.id.clone())
            .collect();
        Ok(SearchPage {
            result_ids,
            total,
            next: None,
            prev: None,
        })
    }

    async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>> {
        self.record(ApiCall::Dogs(ids.to_vec()), Some(FailPoint::Dogs))?;
        let state = self.lock();
        Ok(ids
            .iter()
            .filter_map(|id| state.dogs.iter().find(|d| &d.id == id).cloned())
            .collect())
    }

    async fn find_match(&self, ids: &[String]) -> Result<String> {
        self.record(ApiCall::Match(ids.to_vec()), Some(FailPoint::Match))?;
        let state = self.lock();
        state
            .match_id
            .clone()
            .or_else(|| ids.first().cloned())
            .ok_or_else(|| Error::protocol("dogs/match", "no favorites to match"))
    }
}
