//! # dogdex-core - Core Domain Types
//!
//! Foundation crate for dogdex. Provides domain types, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Dog`] - A single adoptable dog record as returned by the service
//! - [`SortOrder`] - Breed sort direction (ascending / descending)
//! - [`BreedFilter`] - Either every breed or one named breed
//! - [`SearchSelection`] - The user's current query intent
//! - [`ViewMode`] - Which data source feeds the gallery
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; [`Error::is_auth`] flags an expired session
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dogdex_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all dogdex crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{
    AppPhase, BreedFilter, Dog, SearchSelection, SelectionKey, SortOrder, ViewMode, ALL_BREEDS,
};
