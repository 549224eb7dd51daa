//! reqwest-backed client for the dog adoption service
//!
//! Every call carries the session cookie captured at login. Responses with
//! 401/403 map to [`Error::NotAuthenticated`]; any other non-success status
//! maps to [`Error::Status`].

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use dogdex_core::prelude::*;
use dogdex_core::Dog;

use crate::protocol::{
    LoginRequest, MatchResponse, SearchPage, SearchQuery, BREEDS_PATH, DOGS_PATH, LOGIN_PATH,
    LOGOUT_PATH, MATCH_PATH, SEARCH_PATH,
};
use crate::service::DogService;

/// Base URL of the public service
pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

/// HTTP client holding the cookie jar for one signed-in user
#[derive(Debug, Clone)]
pub struct DogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DogClient {
    /// Build a client for `base_url`
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(concat!("dogdex/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {e}")))?;

        debug!("Dog service client targeting {}", base_url);
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_url(format!("{path}: {e}")))
    }

    /// Resolve the search endpoint with its query string
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, endpoint: &str) -> Result<T> {
        trace!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;
        let response = check_status(endpoint, response)?;
        decode(endpoint, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        trace!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;
        let response = check_status(path, response)?;
        decode(path, response).await
    }
}

impl DogService for DogClient {
    async fn login(&self, name: &str, email: &str) -> Result<()> {
        let url = self.endpoint(LOGIN_PATH)?;
        let body = LoginRequest {
            name: name.to_string(),
            email: email.to_string(),
        };
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(LOGIN_PATH, e))?;
        check_status(LOGIN_PATH, response)?;
        info!("Signed in as {}", name);
        Ok(())
    }

    async fn logout(&self) -> Result<()> {
        let url = self.endpoint(LOGOUT_PATH)?;
        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|e| transport_error(LOGOUT_PATH, e))?;
        check_status(LOGOUT_PATH, response)?;
        info!("Signed out");
        Ok(())
    }

    async fn breeds(&self) -> Result<Vec<String>> {
        let url = self.endpoint(BREEDS_PATH)?;
        self.get_json(url, BREEDS_PATH).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let url = self.search_url(query)?;
        let page: SearchPage = self.get_json(url, SEARCH_PATH).await?;
        debug!(
            "Search returned {} ids (total {})",
            page.result_ids.len(),
            page.total
        );
        Ok(page)
    }

    async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>> {
        self.post_json(DOGS_PATH, ids).await
    }

    async fn find_match(&self, ids: &[String]) -> Result<String> {
        let response: MatchResponse = self.post_json(MATCH_PATH, ids).await?;
        Ok(response.matched)
    }
}

/// Parse the base URL and make sure relative joins append to its path
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| Error::invalid_url(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::invalid_url(format!("{raw}: not a base URL")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> Error {
    Error::http(format!("{endpoint}: {err}"))
}

fn check_status(endpoint: &str, response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            warn!("{} rejected the session cookie", endpoint);
            Err(Error::NotAuthenticated)
        }
        status => Err(Error::status(endpoint, status.as_u16())),
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| transport_error(endpoint, e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::protocol(endpoint, e.to_string()))
}
