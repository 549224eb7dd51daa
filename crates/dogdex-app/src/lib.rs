//! dogdex-app - Application state and orchestration for dogdex
//!
//! Implements the TEA (The Elm Architecture) pattern: [`Message`]s flow
//! through [`handler::update`], which mutates [`AppState`] and may request
//! an [`UpdateAction`]. Actions run against a [`dogdex_api::DogService`] and
//! answer with another message.
//!
//! The browse screen is built from small state machines with no rendering
//! dependencies:
//! - [`pagination::PaginationState`] - page controls with a sliding window
//! - [`search_box::SearchBoxState`] - fuzzy breed search and mode toggles
//! - [`favorites::FavoriteSet`] - session-local favorites
//! - [`fetch::FetchOrchestrator`] - query resolution and stale-response guard

pub mod actions;
pub mod config;
pub mod favorites;
pub mod fetch;
pub mod fuzzy;
pub mod gallery;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod pagination;
pub mod process;
pub mod search_box;
pub mod signals;
pub mod sign_in;
pub mod state;

pub use config::Settings;
pub use fetch::{FetchParams, FetchPlan, Query, RequestId};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use pagination::{PageItem, PaginationState};
pub use process::process_message;
pub use state::{AppState, UiMode};
