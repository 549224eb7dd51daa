//! Grid of dog cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dogdex_app::favorites::FavoriteSet;
use dogdex_app::state::GALLERY_COLUMNS;
use dogdex_core::Dog;

use crate::layout::CARD_HEIGHT;
use crate::theme::{palette, styles};

pub struct DogGallery<'a> {
    dogs: &'a [Dog],
    selected: usize,
    favorites: &'a FavoriteSet,
    focused: bool,
    empty_message: &'a str,
    /// Spinner frame while a fetch is pending
    loading: Option<&'a str>,
}

impl<'a> DogGallery<'a> {
    pub fn new(dogs: &'a [Dog], selected: usize, favorites: &'a FavoriteSet) -> Self {
        Self {
            dogs,
            selected,
            favorites,
            focused: true,
            empty_message: "No dogs to show",
            loading: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn loading(mut self, spinner: Option<&'a str>) -> Self {
        self.loading = spinner;
        self
    }

    /// First grid row to draw so the selected card stays on screen
    fn first_row(&self, visible_rows: usize) -> usize {
        let selected_row = self.selected / GALLERY_COLUMNS;
        if selected_row >= visible_rows {
            selected_row + 1 - visible_rows
        } else {
            0
        }
    }

    fn render_placeholder(&self, area: Rect, buf: &mut Buffer) {
        let text = match self.loading {
            Some(frame) => Line::from(vec![
                Span::styled(frame, styles::accent()),
                Span::styled(" Fetching dogs…", styles::text_secondary()),
            ]),
            None => Line::from(Span::styled(self.empty_message, styles::text_muted())),
        };
        let y = area.y + area.height / 2;
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, y, area.width, 1), buf);
    }

    fn render_card(&self, dog: &Dog, selected: bool, area: Rect, buf: &mut Buffer) {
        let is_favorite = self.favorites.contains(&dog.id);

        let mut title = vec![Span::styled(format!(" {} ", dog.name), styles::text_bright_bold())];
        if is_favorite {
            title.push(Span::styled("♥ ", styles::favorite()));
        }

        let block = styles::glass_block(selected && self.focused)
            .title(Line::from(title))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let heart = if is_favorite {
            Span::styled("♥ Favorited", styles::favorite())
        } else {
            Span::styled("♡ space to favorite", styles::text_muted())
        };
        let lines = vec![
            Line::from(Span::styled(dog.breed.as_str(), styles::text_primary())),
            Line::from(vec![
                Span::styled(dog.age_label(), styles::text_secondary()),
                Span::styled(" · ", styles::text_muted()),
                Span::styled(format!("ZIP {}", dog.zip_code), styles::text_secondary()),
            ]),
            Line::from(""),
            Line::from(heart),
        ];

        let paragraph = Paragraph::new(lines);
        if selected && self.focused {
            paragraph
                .style(Style::default().bg(palette::POPUP_BG))
                .render(inner, buf);
        } else {
            paragraph.render(inner, buf);
        }
    }
}

impl Widget for DogGallery<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.dogs.is_empty() {
            self.render_placeholder(area, buf);
            return;
        }

        let card_width = area.width / GALLERY_COLUMNS as u16;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let first_row = self.first_row(visible_rows);

        for (row, chunk) in self
            .dogs
            .chunks(GALLERY_COLUMNS)
            .enumerate()
            .skip(first_row)
            .take(visible_rows)
        {
            let y = area.y + ((row - first_row) as u16) * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            for (col, dog) in chunk.iter().enumerate() {
                let x = area.x + col as u16 * card_width;
                let card = Rect::new(x, y, card_width, height);
                let index = row * GALLERY_COLUMNS + col;
                self.render_card(dog, index == self.selected, card, buf);
            }
        }
    }
}
