//! Quit confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, clear_area};
use crate::theme::styles;

pub struct ConfirmDialog {
    favorite_count: usize,
}

impl ConfirmDialog {
    pub fn new(favorite_count: usize) -> Self {
        Self { favorite_count }
    }
}

impl Widget for ConfirmDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = centered_rect(48, 7, area);
        clear_area(dialog, buf);

        let block = styles::modal_block(" Quit dogdex? ");
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let noun = if self.favorite_count == 1 {
            "favorite"
        } else {
            "favorites"
        };
        let lines = vec![
            Line::from(Span::styled(
                format!("Your {} {noun} will be lost.", self.favorite_count),
                styles::text_primary(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", styles::keybinding()),
                Span::styled(" quit   ", styles::text_muted()),
                Span::styled("n", styles::keybinding()),
                Span::styled(" cancel", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_dialog_mentions_favorites() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ConfirmDialog::new(3), area);
        assert!(term.buffer_contains("Quit dogdex?"));
        assert!(term.buffer_contains("Your 3 favorites will be lost."));
    }

    #[test]
    fn test_singular_favorite() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ConfirmDialog::new(1), area);
        assert!(term.buffer_contains("Your 1 favorite will be lost."));
    }
}
