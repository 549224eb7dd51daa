//! Screen layout for the browse screen

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of one dog card including borders
pub const CARD_HEIGHT: u16 = 6;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, user and key hints
    pub header: Rect,
    /// Breed search input and toggles
    pub search: Rect,
    /// Dog cards
    pub gallery: Rect,
    /// Page controls; zero height when hidden
    pub pagination: Rect,
    /// One-line status
    pub status: Rect,
}

/// Split the screen; `show_pagination` reserves the page control row
pub fn create(area: Rect, show_pagination: bool) -> ScreenAreas {
    let pagination_height = if show_pagination { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),                 // Header (glass container)
        Constraint::Length(3),                 // Search bar (glass container)
        Constraint::Min(CARD_HEIGHT),          // Gallery
        Constraint::Length(pagination_height), // Page controls
        Constraint::Length(1),                 // Status line
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        gallery: chunks[2],
        pagination: chunks[3],
        status: chunks[4],
    }
}
