//! Bottom status line

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dogdex_app::state::StatusMessage;
use dogdex_core::ViewMode;

use crate::theme::styles;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick count; advances every other tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / 2) % SPINNER_FRAMES.len() as u64) as usize]
}

pub struct StatusBar<'a> {
    status: Option<&'a StatusMessage>,
    loading: Option<&'a str>,
    last_loaded: Option<DateTime<Local>>,
    mode: ViewMode,
    page: u32,
    total_pages: u32,
    total_items: u64,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            status: None,
            loading: None,
            last_loaded: None,
            mode,
            page: 1,
            total_pages: 1,
            total_items: 0,
        }
    }

    pub fn status(mut self, status: Option<&'a StatusMessage>) -> Self {
        self.status = status;
        self
    }

    pub fn loading(mut self, spinner: Option<&'a str>) -> Self {
        self.loading = spinner;
        self
    }

    pub fn last_loaded(mut self, at: Option<DateTime<Local>>) -> Self {
        self.last_loaded = at;
        self
    }

    pub fn pages(mut self, page: u32, total_pages: u32, total_items: u64) -> Self {
        self.page = page;
        self.total_pages = total_pages;
        self.total_items = total_items;
        self
    }

    fn left_line(&self) -> Line<'a> {
        if let Some(frame) = self.loading {
            return Line::from(vec![
                Span::styled(frame, styles::accent()),
                Span::styled(" Loading…", styles::text_secondary()),
            ]);
        }
        if let Some(status) = self.status {
            return Line::from(vec![
                Span::styled(status.text.as_str(), styles::status(status.kind)),
                Span::styled(
                    format!("  {}", status.at.format("%H:%M:%S")),
                    styles::text_muted(),
                ),
            ]);
        }
        match self.last_loaded {
            Some(at) => Line::from(Span::styled(
                format!("Updated {}", at.format("%H:%M:%S")),
                styles::text_muted(),
            )),
            None => Line::from(""),
        }
    }

    fn right_line(&self) -> Line<'static> {
        let noun = if self.total_items == 1 { "dog" } else { "dogs" };
        let text = match self.mode {
            ViewMode::Match => "Your match".to_string(),
            _ => format!(
                "Page {} of {} · {} {noun}",
                self.page,
                self.total_pages.max(1),
                self.total_items
            ),
        };
        Line::from(Span::styled(text, styles::text_secondary()))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let right = self.right_line();
        let right_width = (right.width() as u16).min(area.width);
        let left_area = Rect::new(
            area.x + 1,
            area.y,
            area.width.saturating_sub(right_width + 3),
            1,
        );
        Paragraph::new(self.left_line()).render(left_area, buf);
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(Rect::new(area.x, area.y, area.width.saturating_sub(1), 1), buf);
    }
}
