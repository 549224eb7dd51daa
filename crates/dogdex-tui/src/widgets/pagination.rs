//! Page control row

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dogdex_app::PageItem;

use crate::theme::styles;

pub struct PaginationBar<'a> {
    items: &'a [PageItem],
    /// Keyboard focus index, when the row has focus
    focus: Option<usize>,
}

impl<'a> PaginationBar<'a> {
    pub fn new(items: &'a [PageItem]) -> Self {
        Self { items, focus: None }
    }

    pub fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }

    fn label(item: &PageItem) -> String {
        match item {
            PageItem::Previous { .. } => "‹".to_string(),
            PageItem::Next { .. } => "›".to_string(),
            PageItem::Page { number, .. } => number.to_string(),
            PageItem::Ellipsis => "…".to_string(),
            PageItem::ShiftLeft => "«".to_string(),
            PageItem::ShiftRight => "»".to_string(),
        }
    }

    fn item_style(item: &PageItem, focused: bool) -> Style {
        let base = match item {
            PageItem::Page { active: true, .. } => styles::focused_selected(),
            item if !item.is_enabled() => styles::text_muted(),
            PageItem::Ellipsis | PageItem::ShiftLeft | PageItem::ShiftRight => styles::accent(),
            _ => styles::text_secondary(),
        };
        if focused {
            base.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            base
        }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.items.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.items.len() * 2);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let focused = self.focus == Some(i);
            spans.push(Span::styled(
                format!(" {} ", Self::label(item)),
                Self::item_style(item, focused),
            ));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
