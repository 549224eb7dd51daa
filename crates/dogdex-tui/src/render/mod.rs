//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use dogdex_app::state::{AppState, UiMode};
use dogdex_core::AppPhase;

use super::{layout, widgets};
use crate::theme::palette;

/// Widest the suggestion dropdown gets
const DROPDOWN_MAX_WIDTH: u16 = 48;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; everything shown is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let spinner = widgets::spinner_frame(state.tick_count);

    if matches!(state.phase, AppPhase::SignedOut | AppPhase::Authenticating) {
        render_sign_in(frame, state, area, spinner);
        return;
    }

    let areas = layout::create(area, state.pagination_visible());
    let mode = state.view_mode();

    frame.render_widget(
        widgets::MainHeader::new(state.user_name.as_deref(), mode),
        areas.header,
    );

    frame.render_widget(
        widgets::SearchBar::new(&state.search_box, mode, state.favorites.len())
            .focused(state.ui_mode == UiMode::SearchInput),
        areas.search,
    );

    let loading = state.is_loading().then_some(spinner);
    frame.render_widget(
        widgets::DogGallery::new(
            state.gallery.dogs(),
            state.gallery.selected_index(),
            &state.favorites,
        )
        .focused(state.ui_mode == UiMode::Browse)
        .empty_message(state.empty_message())
        .loading(loading),
        areas.gallery,
    );

    if state.pagination_visible() {
        let items = state.pagination.items();
        let focus = (state.ui_mode == UiMode::Pagination).then(|| state.pagination.focus());
        frame.render_widget(
            widgets::PaginationBar::new(&items).focus(focus),
            areas.pagination,
        );
    }

    frame.render_widget(
        widgets::StatusBar::new(mode)
            .status(state.status.as_ref())
            .loading(loading.or_else(|| state.match_pending.then_some(spinner)))
            .last_loaded(state.last_loaded)
            .pages(
                state.pagination.current_page(),
                state.pagination.total_pages(),
                state.pagination.total_items(),
            ),
        areas.status,
    );

    if state.ui_mode == UiMode::SearchInput && state.search_box.dropdown_open {
        render_suggestions(frame, state, areas.search, area);
    }

    if state.ui_mode == UiMode::ConfirmQuit {
        frame.render_widget(widgets::ConfirmDialog::new(state.favorites.len()), area);
    }
}

fn render_sign_in(frame: &mut Frame, state: &AppState, area: Rect, spinner: &str) {
    let header_area = Rect::new(area.x, area.y, area.width, area.height.min(3));
    frame.render_widget(
        widgets::MainHeader::new(None, state.view_mode()).without_hints(),
        header_area,
    );
    frame.render_widget(
        widgets::SignInPanel::new(&state.sign_in).spinner(spinner),
        area,
    );
}

/// Dropdown anchored under the search input
fn render_suggestions(frame: &mut Frame, state: &AppState, search: Rect, screen: Rect) {
    let list = widgets::SuggestionList::new(
        state.search_box.suggestions(&state.breed_index),
        state.search_box.highlighted,
    );

    let y = search.bottom();
    let available = screen.bottom().saturating_sub(y);
    if available < 3 {
        return;
    }
    let width = DROPDOWN_MAX_WIDTH.min(search.width.saturating_sub(4));
    let dropdown = Rect::new(search.x + 2, y, width, list.height().min(available));
    frame.render_widget(list, dropdown);
}
