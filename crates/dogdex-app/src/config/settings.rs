//! Loading and initializing the settings file

use std::path::{Path, PathBuf};

use dogdex_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

const APP_DIR: &str = "dogdex";

/// `<config dir>/dogdex/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`
///
/// A missing, unreadable or malformed file yields defaults; problems are
/// logged, never returned.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings.sanitized()
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `path` unless one exists
///
/// Returns `true` when a file was created.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    let default_content = r#"# dogdex configuration

[api]
# base_url = "https://frontend-take-home-service.fetch.com"
timeout_secs = 15

[browse]
page_size = 50          # Dogs per page

[search]
threshold = 0.3         # 0.0 = exact, 1.0 = anything goes
max_suggestions = 8

[behavior]
confirm_quit = true     # Ask before quitting with unsaved favorites

[user]
# name = ""
# email = ""
"#;
    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}
