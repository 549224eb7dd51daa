//! dogdex Library
//!
//! A terminal client for browsing, favoriting and matching adoptable dogs.

use std::sync::Arc;
use std::time::Duration;

use dogdex_api::{DogClient, DEFAULT_BASE_URL};
use dogdex_core::prelude::*;

pub use dogdex_app::config;
pub use dogdex_app::Settings;

/// Install error reporting and file logging
///
/// Call once, before anything logs. The TUI owns stdout so logs go to a file.
pub fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    dogdex_core::logging::init()?;
    Ok(())
}

/// Run the terminal UI against the configured service
pub async fn run(settings: Settings) -> Result<()> {
    let base_url = settings
        .api
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    info!("Service: {}", base_url);

    let client = DogClient::new(
        &base_url,
        Some(Duration::from_secs(settings.api.timeout_secs)),
    )?;

    let result = dogdex_tui::run(settings, Arc::new(client)).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}
