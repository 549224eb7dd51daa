//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;

use dogdex_core::prelude::*;
use dogdex_core::{AppPhase, Dog, SearchSelection, ViewMode};

use crate::favorites::FavoriteToggle;
use crate::fetch::{FetchParams, FetchPlan};
use crate::fuzzy::FuzzyIndex;
use crate::message::Message;
use crate::search_box::SearchEvent;
use crate::state::{AppState, StatusMessage, UiMode, GALLERY_COLUMNS};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Shown on the sign-in form when the breed list cannot be loaded
pub const SESSION_EXPIRED: &str = "Your session has expired, please sign in again";

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Sign-in
        // ─────────────────────────────────────────────────────────
        Message::SignInChar(c) => {
            state.sign_in.insert_char(c);
            UpdateResult::none()
        }

        Message::SignInBackspace => {
            state.sign_in.backspace();
            UpdateResult::none()
        }

        Message::SignInNextField => {
            state.sign_in.focus_next();
            UpdateResult::none()
        }

        Message::SubmitSignIn => match state.sign_in.submit() {
            Ok(body) => {
                state.phase = AppPhase::Authenticating;
                UpdateResult::action(UpdateAction::Login {
                    name: body.name,
                    email: body.email,
                })
            }
            Err(e) => {
                debug!("Sign-in not submitted: {}", e);
                UpdateResult::none()
            }
        },

        Message::LoginSucceeded { name } => {
            if state.phase != AppPhase::Authenticating {
                return UpdateResult::none();
            }
            info!("Session started for {}", name);
            state.begin_browsing(name);
            UpdateResult {
                message: Some(Message::Fetch(FetchParams::initial())),
                action: Some(UpdateAction::LoadBreeds),
            }
        }

        Message::LoginFailed { error } => {
            warn!("Login failed: {}", error);
            state.phase = AppPhase::SignedOut;
            state.sign_in.fail(format!("Sign-in failed: {error}"));
            UpdateResult::none()
        }

        Message::SignOut => {
            if state.phase != AppPhase::Browsing {
                return UpdateResult::none();
            }
            state.end_session(None);
            UpdateResult::action(UpdateAction::Logout)
        }

        Message::LoggedOut { error } => {
            if let Some(error) = error {
                warn!("Sign-out request failed: {}", error);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Breed corpus
        // ─────────────────────────────────────────────────────────
        Message::BreedsLoaded { breeds } => {
            if state.phase != AppPhase::Browsing {
                debug!("Ignoring breed list outside a session");
                return UpdateResult::none();
            }
            debug!("Loaded {} breeds", breeds.len());
            state.breed_index = FuzzyIndex::new(breeds, state.settings.search.threshold);
            if state.ui_mode == UiMode::SearchInput && !state.search_box.query.is_empty() {
                let query = state.search_box.query.clone();
                state.search_box.input(&state.breed_index, &query);
            }
            UpdateResult::none()
        }

        Message::BreedsFailed { error } => {
            if state.phase != AppPhase::Browsing {
                return UpdateResult::none();
            }
            warn!("Breed list unavailable ({}), returning to sign-in", error);
            state.end_session(Some(SESSION_EXPIRED.to_string()));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search box
        // ─────────────────────────────────────────────────────────
        Message::EnterSearch => {
            state.ui_mode = UiMode::SearchInput;
            state.search_box.dropdown_open = !state.search_box.results.is_empty();
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            state.search_box.input(&state.breed_index, &text);
            UpdateResult::none()
        }

        Message::SearchHighlightNext => {
            state.search_box.highlight_next();
            UpdateResult::none()
        }

        Message::SearchHighlightPrevious => {
            state.search_box.highlight_previous();
            UpdateResult::none()
        }

        Message::SearchSubmit => {
            let event = state.search_box.submit(&state.breed_index);
            state.ui_mode = UiMode::Browse;
            handle_search_event(state, event)
        }

        Message::SearchDismiss => {
            state.search_box.dismiss();
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }

        Message::ToggleFavoritesMode => {
            let event = state.search_box.toggle_favorites();
            handle_search_event(state, event)
        }

        Message::ToggleOrder => {
            let mode = state.view_mode();
            match state.search_box.toggle_order(mode) {
                Some(event) => handle_search_event(state, event),
                None => UpdateResult::none(),
            }
        }

        Message::FindMatch => {
            if state.match_pending {
                return UpdateResult::none();
            }
            match state.search_box.request_match(state.favorites.len()) {
                Some(event) => handle_search_event(state, event),
                None => UpdateResult::none(),
            }
        }

        Message::Selection(selection) => {
            UpdateResult::message(Message::Fetch(FetchParams::from_selection(&selection)))
        }

        // ─────────────────────────────────────────────────────────
        // Gallery
        // ─────────────────────────────────────────────────────────
        Message::GalleryNext => {
            state.gallery.select_next();
            UpdateResult::none()
        }

        Message::GalleryPrevious => {
            state.gallery.select_previous();
            UpdateResult::none()
        }

        Message::GalleryFirst => {
            state.gallery.select_first();
            UpdateResult::none()
        }

        Message::GalleryLast => {
            state.gallery.select_last();
            UpdateResult::none()
        }

        Message::GalleryRowDown => {
            state.gallery.select_by(GALLERY_COLUMNS as isize);
            UpdateResult::none()
        }

        Message::GalleryRowUp => {
            state.gallery.select_by(-(GALLERY_COLUMNS as isize));
            UpdateResult::none()
        }

        Message::ToggleSelectedFavorite => match state.selected_dog() {
            Some(dog) => UpdateResult::message(Message::ToggleFavorite { id: dog.id.clone() }),
            None => UpdateResult::none(),
        },

        Message::ToggleFavorite { id } => handle_toggle_favorite(state, id),

        // ─────────────────────────────────────────────────────────
        // Pagination
        // ─────────────────────────────────────────────────────────
        Message::NextPage => {
            if !state.pagination_visible() {
                return UpdateResult::none();
            }
            page_result(state.pagination.next())
        }

        Message::PreviousPage => {
            if !state.pagination_visible() {
                return UpdateResult::none();
            }
            page_result(state.pagination.previous())
        }

        Message::ExpandPages => {
            state.pagination.expand();
            UpdateResult::none()
        }

        Message::ShiftPagesLeft => {
            state.pagination.shift_left();
            UpdateResult::none()
        }

        Message::ShiftPagesRight => {
            state.pagination.shift_right();
            UpdateResult::none()
        }

        Message::FocusPagination => {
            if state.pagination_visible() && state.pagination.total_pages() > 0 {
                state.ui_mode = UiMode::Pagination;
                state.pagination.focus_current();
            }
            UpdateResult::none()
        }

        Message::FocusGallery => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }

        Message::PaginationFocusLeft => {
            state.pagination.focus_left();
            UpdateResult::none()
        }

        Message::PaginationFocusRight => {
            state.pagination.focus_right();
            UpdateResult::none()
        }

        Message::PaginationActivate => page_result(state.pagination.activate_focused()),

        Message::PageChanged { page } => match FetchParams::page_change(state.view_mode(), page) {
            Some(params) => UpdateResult::message(Message::Fetch(params)),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Fetching
        // ─────────────────────────────────────────────────────────
        Message::Fetch(params) => handle_fetch(state, params),

        Message::FetchCompleted {
            request_id,
            mode,
            dogs,
            total,
        } => {
            if !state.orchestrator.is_current(request_id) {
                debug!("Discarding stale results for fetch {}", request_id);
                return UpdateResult::none();
            }
            apply_results(state, mode, dogs, total);
            UpdateResult::none()
        }

        Message::FetchFailed {
            request_id,
            error,
            session_expired,
        } => {
            if !state.orchestrator.is_current(request_id) {
                debug!("Discarding stale failure for fetch {}", request_id);
                return UpdateResult::none();
            }
            warn!("Fetch {} failed: {}", request_id, error);
            if session_expired {
                state.end_session(Some(SESSION_EXPIRED.to_string()));
                return UpdateResult::none();
            }
            state.loading = None;
            state.status = Some(StatusMessage::error(format!("Could not load dogs: {error}")));
            UpdateResult::none()
        }

        Message::MatchFound { id } => {
            if !state.match_pending || state.phase != AppPhase::Browsing {
                return UpdateResult::none();
            }
            state.match_pending = false;
            info!("Service matched dog {}", id);
            UpdateResult::message(Message::Selection(SearchSelection::matched(id)))
        }

        Message::MatchFailed {
            error,
            session_expired,
        } => {
            if !state.match_pending {
                return UpdateResult::none();
            }
            warn!("Match request failed: {}", error);
            if session_expired {
                state.end_session(Some(SESSION_EXPIRED.to_string()));
                return UpdateResult::none();
            }
            state.match_pending = false;
            // Still showing favorites, so the toggle goes back on
            state.search_box.favorites_mode = true;
            state.status = Some(StatusMessage::error(format!("Could not find a match: {error}")));
            UpdateResult::none()
        }
    }
}

fn handle_search_event(state: &mut AppState, event: SearchEvent) -> UpdateResult {
    match event {
        SearchEvent::Select(selection) => UpdateResult::message(Message::Selection(selection)),
        SearchEvent::OrderChanged(order) => {
            UpdateResult::message(Message::Fetch(FetchParams::reorder(order)))
        }
        SearchEvent::MatchRequested => {
            state.match_pending = true;
            UpdateResult::action(UpdateAction::FindMatch {
                ids: state.favorites.ids().to_vec(),
            })
        }
    }
}

fn handle_toggle_favorite(state: &mut AppState, id: String) -> UpdateResult {
    match state.favorites.toggle(&id) {
        FavoriteToggle::Added => {
            debug!("Favorited {}", id);
            UpdateResult::none()
        }
        FavoriteToggle::Removed => {
            debug!("Unfavorited {}", id);
            if state.view_mode() != ViewMode::Favorites {
                return UpdateResult::none();
            }
            state.gallery.remove(&id);
            state.pagination.set_total_items(state.favorites.len() as u64);
            // The page emptied out but earlier favorites remain
            if state.gallery.is_empty() && !state.favorites.is_empty() {
                let page = state.pagination.current_page();
                if let Some(params) = FetchParams::page_change(ViewMode::Favorites, page) {
                    return UpdateResult::message(Message::Fetch(params));
                }
            }
            UpdateResult::none()
        }
    }
}

fn handle_fetch(state: &mut AppState, params: FetchParams) -> UpdateResult {
    let Some(plan) = state.orchestrator.plan(&params, &state.favorites) else {
        return UpdateResult::none();
    };
    if let Some(page) = params.page {
        state.pagination.set_page(page);
    }
    match plan {
        FetchPlan::Clear { request_id, mode } => {
            debug!("Fetch {} needs no network, clearing gallery", request_id);
            apply_results(state, mode, Vec::new(), 0);
            UpdateResult::none()
        }
        plan => {
            state.loading = Some(plan.request_id());
            UpdateResult::action(UpdateAction::Fetch(plan))
        }
    }
}

fn apply_results(state: &mut AppState, mode: ViewMode, dogs: Vec<Dog>, total: u64) {
    state.loading = None;
    state.status = match (mode, dogs.first()) {
        (ViewMode::Match, Some(dog)) => Some(StatusMessage::info(format!(
            "You matched with {}!",
            dog.name
        ))),
        _ => None,
    };
    state.gallery.replace(dogs);
    state.pagination.set_total_items(total);
    state.last_loaded = Some(Local::now());
}

fn page_result(page: Option<u32>) -> UpdateResult {
    match page {
        Some(page) => UpdateResult::message(Message::PageChanged { page }),
        None => UpdateResult::none(),
    }
}
