//! dogdex-tui - Terminal UI for dogdex
//!
//! Renders [`dogdex_app::AppState`] with ratatui and feeds crossterm key
//! events back into the app as messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
