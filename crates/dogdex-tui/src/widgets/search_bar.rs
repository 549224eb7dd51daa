//! Breed search input with its toggles and suggestion dropdown

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dogdex_app::search_box::SearchBoxState;
use dogdex_core::ViewMode;

use super::modal_overlay;
use crate::theme::{palette, styles};

const PLACEHOLDER: &str = "Search breeds…";

/// Search input row
pub struct SearchBar<'a> {
    search: &'a SearchBoxState,
    mode: ViewMode,
    favorite_count: usize,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(search: &'a SearchBoxState, mode: ViewMode, favorite_count: usize) -> Self {
        Self {
            search,
            mode,
            favorite_count,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn input_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled("/ ", styles::text_muted())];
        if self.search.query.is_empty() && !self.focused {
            let label = self
                .search
                .filter
                .breed()
                .map(|b| b.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            spans.push(Span::styled(label, styles::text_muted()));
        } else {
            spans.push(Span::styled(
                self.search.query.as_str(),
                styles::text_primary(),
            ));
        }
        if self.focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn toggles_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        let favorites_style = if self.search.favorites_mode {
            styles::favorite()
        } else {
            styles::text_muted()
        };
        spans.push(Span::styled(
            format!("♥ Favorites ({})", self.favorite_count),
            favorites_style,
        ));

        if self.search.order_toggle_visible(self.mode) {
            let order_style = if self.search.order_toggle_enabled() {
                styles::accent()
            } else {
                styles::text_muted().add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled("  ", Style::default()));
            spans.push(Span::styled(format!("Sort {}", self.search.order), order_style));
        }

        if self.search.match_visible(self.favorite_count) {
            spans.push(Span::styled("  ", Style::default()));
            spans.push(Span::styled("m", styles::keybinding()));
            spans.push(Span::styled(" Find my match", styles::text_bright_bold()));
        }

        Line::from(spans)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Breed ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let toggles = self.toggles_line();
        let toggles_width = (toggles.width() as u16).min(inner.width);
        let input_width = inner.width.saturating_sub(toggles_width + 1);

        Paragraph::new(self.input_line()).render(
            Rect::new(inner.x, inner.y, input_width, 1),
            buf,
        );
        Paragraph::new(toggles)
            .alignment(Alignment::Right)
            .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
    }
}

/// Dropdown of fuzzy breed suggestions below the search bar
pub struct SuggestionList<'a> {
    items: Vec<&'a str>,
    highlighted: usize,
}

impl<'a> SuggestionList<'a> {
    pub fn new(items: Vec<&'a str>, highlighted: usize) -> Self {
        Self { items, highlighted }
    }

    /// Rows needed including borders
    pub fn height(&self) -> u16 {
        self.items.len().max(1) as u16 + 2
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::clear_area(area, buf);

        let block = styles::glass_block(true).style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No matching breeds, Enter shows all",
                styles::text_muted(),
            )))
            .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == self.highlighted {
                    Line::from(Span::styled(format!("▸ {name}"), styles::focused_selected()))
                } else {
                    Line::from(Span::styled(format!("  {name}"), styles::text_primary()))
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
