//! Configuration for dogdex
//!
//! Settings live in `<config dir>/dogdex/config.toml`. Every section and
//! field is optional; anything missing falls back to its default.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, CONFIG_FILENAME};
pub use types::*;
