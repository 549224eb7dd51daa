//! Header bar
//!
//! Shows the app title, the active view and the signed-in user, with the
//! main key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dogdex_core::ViewMode;

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    user_name: Option<&'a str>,
    mode: ViewMode,
    show_hints: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(user_name: Option<&'a str>, mode: ViewMode) -> Self {
        Self {
            user_name,
            mode,
            show_hints: true,
        }
    }

    /// Hide the key hints (sign-in screen)
    pub fn without_hints(mut self) -> Self {
        self.show_hints = false;
        self
    }

    fn title_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled("dogdex", styles::accent_bold()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(self.mode.label(), styles::text_primary()),
        ];
        if let Some(name) = self.user_name {
            spans.push(Span::styled(" · ", styles::text_muted()));
            spans.push(Span::styled(name, styles::text_secondary()));
        }
        Line::from(spans)
    }

    fn hints_line() -> Line<'static> {
        let hint = |key: &'static str, label: &'static str| {
            [
                Span::styled(key, styles::keybinding()),
                Span::styled(label, styles::text_muted()),
            ]
        };
        Line::from(
            [
                hint("/", " search  "),
                hint("f", " favorites  "),
                hint("space", " ♥  "),
                hint("m", " match  "),
                hint("S", " sign out  "),
                hint("q", " quit"),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>(),
        )
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.title_line();
        let title_width = title.width() as u16;
        Paragraph::new(title).render(inner, buf);

        if self.show_hints {
            let hints = Self::hints_line();
            // Only when the hints fit beside the title
            if title_width + hints.width() as u16 + 2 <= inner.width {
                Paragraph::new(hints)
                    .alignment(Alignment::Right)
                    .render(inner, buf);
            }
        }
    }
}
