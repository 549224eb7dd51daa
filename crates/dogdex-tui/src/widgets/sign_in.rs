//! Sign-in form panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dogdex_app::sign_in::{SignInField, SignInForm};

use super::modal_overlay::{centered_rect, clear_area};
use crate::theme::styles;

const PANEL_WIDTH: u16 = 56;
const PANEL_HEIGHT: u16 = 11;

pub struct SignInPanel<'a> {
    form: &'a SignInForm,
    spinner: &'a str,
}

impl<'a> SignInPanel<'a> {
    pub fn new(form: &'a SignInForm) -> Self {
        Self { form, spinner: "…" }
    }

    pub fn spinner(mut self, frame: &'a str) -> Self {
        self.spinner = frame;
        self
    }

    fn field_line(&self, label: &'a str, value: &'a str, field: SignInField) -> Line<'a> {
        let focused = self.form.focus == field && !self.form.submitting;
        let marker = if focused { "▸ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(label, styles::text_secondary()),
            Span::styled(value, styles::text_primary()),
        ];
        if focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for SignInPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
        clear_area(panel, buf);

        let block = styles::modal_block(" Sign in to dogdex ");
        let inner = block.inner(panel);
        block.render(panel, buf);

        let footer = if self.form.submitting {
            Line::from(vec![
                Span::styled(self.spinner, styles::accent()),
                Span::styled(" Signing in…", styles::text_secondary()),
            ])
        } else if let Some(error) = &self.form.error {
            Line::from(Span::styled(error.as_str(), styles::error()))
        } else {
            Line::from("")
        };

        let lines = vec![
            Line::from(Span::styled(
                "Find a dog to take home.",
                styles::text_bright_bold(),
            )),
            Line::from(""),
            self.field_line("Name   ", &self.form.name, SignInField::Name),
            self.field_line("Email  ", &self.form.email, SignInField::Email),
            Line::from(""),
            footer,
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" sign in  ", styles::text_muted()),
                Span::styled("Tab", styles::keybinding()),
                Span::styled(" next field  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" quit", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(inner, buf);
    }
}
