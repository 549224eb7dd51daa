//! Tests for handler module

use dogdex_api::test_utils::{test_dog, test_kennel};
use dogdex_api::SearchQuery;
use dogdex_core::{AppPhase, SearchSelection, SortOrder, ViewMode};

use super::update::SESSION_EXPIRED;
use super::*;
use crate::config::Settings;
use crate::fetch::{FetchParams, FetchPlan, RequestId};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::sign_in::FILL_ALL_FIELDS;
use crate::state::{AppState, UiMode};

/// Run a message and every follow-up, collecting the actions produced
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn browsing_state() -> AppState {
    let mut state = AppState::new(Settings::default());
    state.begin_browsing("Ada".into());
    state
}

fn only_plan(actions: Vec<UpdateAction>) -> FetchPlan {
    match actions.as_slice() {
        [UpdateAction::Fetch(plan)] => plan.clone(),
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn complete(state: &mut AppState, plan: &FetchPlan, dogs: usize, total: u64) {
    drive(
        state,
        Message::FetchCompleted {
            request_id: plan.request_id(),
            mode: plan.mode(),
            dogs: test_kennel(dogs, &["Beagle", "Pug"]),
            total,
        },
    );
}

// ─────────────────────────────────────────────────────────
// Sign-in
// ─────────────────────────────────────────────────────────

#[test]
fn test_blank_sign_in_sends_nothing() {
    let mut state = AppState::new(Settings::default());
    let actions = drive(&mut state, Message::SubmitSignIn);
    assert!(actions.is_empty());
    assert_eq!(state.sign_in.error.as_deref(), Some(FILL_ALL_FIELDS));
    assert_eq!(state.phase, AppPhase::SignedOut);
}

#[test]
fn test_sign_in_emits_login() {
    let mut state = AppState::new(Settings::default());
    for c in "Ada".chars() {
        drive(&mut state, Message::Key(InputKey::Char(c)));
    }
    drive(&mut state, Message::Key(InputKey::Tab));
    for c in "ada@example.com".chars() {
        drive(&mut state, Message::Key(InputKey::Char(c)));
    }
    let actions = drive(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(
        actions,
        vec![UpdateAction::Login {
            name: "Ada".into(),
            email: "ada@example.com".into()
        }]
    );
    assert_eq!(state.phase, AppPhase::Authenticating);
}

#[test]
fn test_login_success_loads_breeds_and_first_page() {
    let mut state = AppState::new(Settings::default());
    state.phase = AppPhase::Authenticating;
    let actions = drive(&mut state, Message::LoginSucceeded { name: "Ada".into() });

    assert_eq!(actions[0], UpdateAction::LoadBreeds);
    match &actions[1] {
        UpdateAction::Fetch(FetchPlan::Search { query, .. }) => {
            assert_eq!(
                *query,
                SearchQuery {
                    breed: None,
                    size: 50,
                    from: 0,
                    order: SortOrder::Asc,
                }
            );
        }
        other => panic!("unexpected action {other:?}"),
    }
    assert_eq!(state.phase, AppPhase::Browsing);
    assert_eq!(state.ui_mode, UiMode::Browse);
    assert!(state.is_loading());
}

#[test]
fn test_login_failure_shows_error() {
    let mut state = AppState::new(Settings::default());
    state.phase = AppPhase::Authenticating;
    state.sign_in.submitting = true;
    drive(
        &mut state,
        Message::LoginFailed {
            error: "HTTP error: connection refused".into(),
        },
    );
    assert_eq!(state.phase, AppPhase::SignedOut);
    assert!(!state.sign_in.submitting);
    assert!(state.sign_in.error.is_some());
}

#[test]
fn test_breeds_failure_returns_to_sign_in() {
    let mut state = browsing_state();
    state.favorites.toggle("dog-1");
    drive(
        &mut state,
        Message::BreedsFailed {
            error: "Not authenticated".into(),
        },
    );
    assert_eq!(state.phase, AppPhase::SignedOut);
    assert_eq!(state.ui_mode, UiMode::SignIn);
    assert_eq!(state.sign_in.error.as_deref(), Some(SESSION_EXPIRED));
    assert!(state.favorites.is_empty());
}

#[test]
fn test_sign_out_clears_session() {
    let mut state = browsing_state();
    state.favorites.toggle("dog-1");
    let actions = drive(&mut state, Message::Key(InputKey::Char('S')));
    assert_eq!(actions, vec![UpdateAction::Logout]);
    assert_eq!(state.phase, AppPhase::SignedOut);
    assert!(state.favorites.is_empty());
}

// ─────────────────────────────────────────────────────────
// Fetching
// ─────────────────────────────────────────────────────────

#[test]
fn test_fetch_completion_fills_gallery_and_pages() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    complete(&mut state, &plan, 50, 1200);

    assert_eq!(state.gallery.len(), 50);
    assert_eq!(state.pagination.total_pages(), 24);
    assert!(!state.is_loading());
    assert!(state.last_loaded.is_some());
}

#[test]
fn test_stale_completion_is_discarded() {
    let mut state = browsing_state();
    let first = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    let second = only_plan(drive(
        &mut state,
        Message::Selection(SearchSelection::breed("Pug")),
    ));

    complete(&mut state, &second, 3, 3);
    complete(&mut state, &first, 50, 1200);

    assert_eq!(state.gallery.len(), 3);
    assert_eq!(state.pagination.total_items(), 3);
}

#[test]
fn test_fetch_failure_keeps_previous_results() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    complete(&mut state, &plan, 5, 500);

    let plan = only_plan(drive(&mut state, Message::NextPage));
    drive(
        &mut state,
        Message::FetchFailed {
            request_id: plan.request_id(),
            error: "timeout".into(),
            session_expired: false,
        },
    );
    assert_eq!(state.gallery.len(), 5);
    assert!(state.status.is_some());
    assert!(!state.is_loading());
}

#[test]
fn test_stale_failure_is_ignored() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    drive(
        &mut state,
        Message::FetchFailed {
            request_id: RequestId(plan.request_id().0 - 1),
            error: "boom".into(),
            session_expired: true,
        },
    );
    assert!(state.status.is_none());
    assert!(state.is_loading());
    assert_eq!(state.phase, AppPhase::Browsing);
}

#[test]
fn test_rejected_session_during_fetch_returns_to_sign_in() {
    let mut state = browsing_state();
    drive(&mut state, Message::ToggleFavorite { id: "a".into() });
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    drive(
        &mut state,
        Message::FetchFailed {
            request_id: plan.request_id(),
            error: "Not signed in".into(),
            session_expired: true,
        },
    );
    assert_eq!(state.phase, AppPhase::SignedOut);
    assert_eq!(state.ui_mode, UiMode::SignIn);
    assert_eq!(state.sign_in.error.as_deref(), Some(SESSION_EXPIRED));
    assert!(state.favorites.is_empty());
}

#[test]
fn test_next_page_requests_next_offset() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    complete(&mut state, &plan, 50, 500);

    let plan = only_plan(drive(&mut state, Message::Key(InputKey::Char(']'))));
    match plan {
        FetchPlan::Search { query, .. } => assert_eq!(query.from, 50),
        other => panic!("unexpected plan {other:?}"),
    }
    assert_eq!(state.pagination.current_page(), 2);
}

#[test]
fn test_new_breed_selection_returns_to_page_one() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    complete(&mut state, &plan, 50, 500);
    drive(&mut state, Message::PageChanged { page: 4 });
    assert_eq!(state.pagination.current_page(), 4);

    let plan = only_plan(drive(
        &mut state,
        Message::Selection(SearchSelection::breed("Pug")),
    ));
    match plan {
        FetchPlan::Search { query, .. } => {
            assert_eq!(query.from, 0);
            assert_eq!(query.breed.as_deref(), Some("Pug"));
        }
        other => panic!("unexpected plan {other:?}"),
    }
    assert_eq!(state.pagination.current_page(), 1);
}

// ─────────────────────────────────────────────────────────
// Search box
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_and_submitting_a_breed() {
    let mut state = browsing_state();
    drive(
        &mut state,
        Message::BreedsLoaded {
            breeds: vec!["Beagle".into(), "Pug".into()],
        },
    );
    drive(&mut state, Message::Key(InputKey::Char('/')));
    assert_eq!(state.ui_mode, UiMode::SearchInput);
    for c in "beagel".chars() {
        drive(&mut state, Message::Key(InputKey::Char(c)));
    }
    assert_eq!(state.search_box.suggestions(&state.breed_index), vec!["Beagle"]);

    let plan = only_plan(drive(&mut state, Message::Key(InputKey::Enter)));
    match plan {
        FetchPlan::Search { query, .. } => assert_eq!(query.breed.as_deref(), Some("Beagle")),
        other => panic!("unexpected plan {other:?}"),
    }
    assert_eq!(state.ui_mode, UiMode::Browse);
}

#[test]
fn test_enter_on_cleared_search_shows_all_breeds() {
    let mut state = browsing_state();
    drive(
        &mut state,
        Message::BreedsLoaded {
            breeds: vec!["Beagle".into(), "Pug".into()],
        },
    );
    drive(&mut state, Message::SearchInput { text: "pug".into() });
    let plan = only_plan(drive(&mut state, Message::SearchSubmit));
    complete(&mut state, &plan, 5, 5);
    assert_eq!(state.orchestrator.last_filter().breed(), Some("Pug"));

    drive(&mut state, Message::Key(InputKey::Char('/')));
    drive(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert!(state.search_box.query.is_empty());
    assert!(state.search_box.suggestions(&state.breed_index).is_empty());

    let plan = only_plan(drive(&mut state, Message::Key(InputKey::Enter)));
    match plan {
        FetchPlan::Search { query, .. } => {
            assert_eq!(query.breed, None);
            assert_eq!(query.from, 0);
            assert_eq!(query.order, SortOrder::Asc);
        }
        other => panic!("unexpected plan {other:?}"),
    }
    assert_eq!(state.view_mode(), ViewMode::Breed);
    assert_eq!(state.pagination.current_page(), 1);
}

#[test]
fn test_escape_keeps_query() {
    let mut state = browsing_state();
    drive(&mut state, Message::EnterSearch);
    drive(&mut state, Message::Key(InputKey::Char('p')));
    let actions = drive(&mut state, Message::Key(InputKey::Esc));
    assert!(actions.is_empty());
    assert_eq!(state.search_box.query, "p");
    assert_eq!(state.ui_mode, UiMode::Browse);
}

#[test]
fn test_order_toggle_only_without_breed_filter() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::ToggleOrder));
    match plan {
        FetchPlan::Search { query, .. } => assert_eq!(query.order, SortOrder::Desc),
        other => panic!("unexpected plan {other:?}"),
    }

    drive(
        &mut state,
        Message::BreedsLoaded {
            breeds: vec!["Pug".into()],
        },
    );
    drive(&mut state, Message::SearchInput { text: "pug".into() });
    drive(&mut state, Message::SearchSubmit);
    assert!(drive(&mut state, Message::ToggleOrder).is_empty());
}

// ─────────────────────────────────────────────────────────
// Favorites
// ─────────────────────────────────────────────────────────

#[test]
fn test_empty_favorites_needs_no_network() {
    let mut state = browsing_state();
    let actions = drive(&mut state, Message::ToggleFavoritesMode);
    assert!(actions.is_empty());
    assert_eq!(state.view_mode(), ViewMode::Favorites);
    assert!(state.gallery.is_empty());
    assert_eq!(state.empty_message(), "You have no favorites yet");
}

#[test]
fn test_first_favorite_replaces_empty_state() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    complete(&mut state, &plan, 3, 3);

    assert!(drive(&mut state, Message::ToggleFavoritesMode).is_empty());
    assert!(state.gallery.is_empty());
    assert_eq!(state.pagination.total_items(), 0);
    assert_eq!(state.empty_message(), "You have no favorites yet");

    let plan = only_plan(drive(&mut state, Message::ToggleFavoritesMode));
    assert_eq!(plan.mode(), ViewMode::Breed);
    complete(&mut state, &plan, 3, 3);
    drive(&mut state, Message::ToggleFavorite { id: "dog-1".into() });

    let plan = only_plan(drive(&mut state, Message::ToggleFavoritesMode));
    assert_eq!(
        plan,
        FetchPlan::Hydrate {
            request_id: plan.request_id(),
            mode: ViewMode::Favorites,
            ids: vec!["dog-1".into()],
            total: 1,
        }
    );
    drive(
        &mut state,
        Message::FetchCompleted {
            request_id: plan.request_id(),
            mode: ViewMode::Favorites,
            dogs: vec![test_dog("dog-1", "Dog 1", "Pug")],
            total: 1,
        },
    );
    assert_eq!(state.gallery.len(), 1);
    assert_eq!(state.gallery.dogs()[0].id, "dog-1");
    assert_eq!(state.pagination.total_items(), 1);
}

#[test]
fn test_favorites_mode_hydrates_favorites() {
    let mut state = browsing_state();
    drive(&mut state, Message::ToggleFavorite { id: "a".into() });
    drive(&mut state, Message::ToggleFavorite { id: "b".into() });

    let plan = only_plan(drive(&mut state, Message::Key(InputKey::Char('f'))));
    assert_eq!(
        plan,
        FetchPlan::Hydrate {
            request_id: plan.request_id(),
            mode: ViewMode::Favorites,
            ids: vec!["a".into(), "b".into()],
            total: 2,
        }
    );

    // Toggling off returns to the remembered breed listing
    let plan = only_plan(drive(&mut state, Message::Key(InputKey::Char('f'))));
    assert!(matches!(plan, FetchPlan::Search { .. }));
    assert_eq!(state.view_mode(), ViewMode::Breed);
}

#[test]
fn test_unfavorite_in_favorites_mode_drops_card() {
    let mut state = browsing_state();
    drive(&mut state, Message::ToggleFavorite { id: "dog-0".into() });
    drive(&mut state, Message::ToggleFavorite { id: "dog-1".into() });
    let plan = only_plan(drive(&mut state, Message::ToggleFavoritesMode));
    complete(&mut state, &plan, 2, 2);

    drive(&mut state, Message::ToggleSelectedFavorite);
    assert_eq!(state.gallery.len(), 1);
    assert_eq!(state.gallery.dogs()[0].id, "dog-1");
    assert_eq!(state.pagination.total_items(), 1);
}

#[test]
fn test_unfavorite_while_browsing_keeps_card() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    complete(&mut state, &plan, 2, 2);
    drive(&mut state, Message::ToggleSelectedFavorite);
    assert!(state.favorites.contains("dog-0"));
    drive(&mut state, Message::ToggleSelectedFavorite);
    assert!(!state.favorites.contains("dog-0"));
    assert_eq!(state.gallery.len(), 2);
}

#[test]
fn test_favorites_paging_slices_ids() {
    let mut settings = Settings::default();
    settings.browse.page_size = 2;
    let mut state = AppState::new(settings);
    state.begin_browsing("Ada".into());
    for id in ["a", "b", "c"] {
        drive(&mut state, Message::ToggleFavorite { id: id.into() });
    }
    let plan = only_plan(drive(&mut state, Message::ToggleFavoritesMode));
    complete(&mut state, &plan, 2, 3);
    assert_eq!(state.pagination.total_pages(), 2);

    let plan = only_plan(drive(&mut state, Message::NextPage));
    match plan {
        FetchPlan::Hydrate { ids, total, .. } => {
            assert_eq!(ids, vec!["c"]);
            assert_eq!(total, 3);
        }
        other => panic!("unexpected plan {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────
// Match
// ─────────────────────────────────────────────────────────

#[test]
fn test_match_flow() {
    let mut state = browsing_state();
    assert!(drive(&mut state, Message::FindMatch).is_empty());

    drive(&mut state, Message::ToggleFavorite { id: "a".into() });
    drive(&mut state, Message::ToggleFavorite { id: "b".into() });
    let plan = only_plan(drive(&mut state, Message::ToggleFavoritesMode));
    complete(&mut state, &plan, 2, 2);

    let actions = drive(&mut state, Message::Key(InputKey::Char('m')));
    assert_eq!(
        actions,
        vec![UpdateAction::FindMatch {
            ids: vec!["a".into(), "b".into()]
        }]
    );
    assert!(!state.search_box.favorites_mode);
    assert!(state.match_pending);

    let plan = only_plan(drive(&mut state, Message::MatchFound { id: "b".into() }));
    assert_eq!(plan.mode(), ViewMode::Match);
    drive(
        &mut state,
        Message::FetchCompleted {
            request_id: plan.request_id(),
            mode: ViewMode::Match,
            dogs: vec![test_dog("b", "Rex", "Pug")],
            total: 1,
        },
    );
    assert_eq!(state.view_mode(), ViewMode::Match);
    assert!(!state.pagination_visible());
    assert!(drive(&mut state, Message::NextPage).is_empty());
    assert!(state.status.is_some());
}

#[test]
fn test_match_failure_restores_favorites_toggle() {
    let mut state = browsing_state();
    drive(&mut state, Message::ToggleFavorite { id: "a".into() });
    drive(&mut state, Message::ToggleFavoritesMode);
    drive(&mut state, Message::FindMatch);
    drive(
        &mut state,
        Message::MatchFailed {
            error: "HTTP 500".into(),
            session_expired: false,
        },
    );
    assert!(state.search_box.favorites_mode);
    assert!(!state.match_pending);
    assert_eq!(state.view_mode(), ViewMode::Favorites);
}

#[test]
fn test_rejected_session_during_match_returns_to_sign_in() {
    let mut state = browsing_state();
    drive(&mut state, Message::ToggleFavorite { id: "a".into() });
    drive(&mut state, Message::ToggleFavoritesMode);
    drive(&mut state, Message::FindMatch);
    drive(
        &mut state,
        Message::MatchFailed {
            error: "Not signed in".into(),
            session_expired: true,
        },
    );
    assert_eq!(state.phase, AppPhase::SignedOut);
    assert!(!state.match_pending);
    assert_eq!(state.sign_in.error.as_deref(), Some(SESSION_EXPIRED));
}

// ─────────────────────────────────────────────────────────
// Keys and quitting
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    for mode in [
        UiMode::SignIn,
        UiMode::Browse,
        UiMode::SearchInput,
        UiMode::Pagination,
        UiMode::ConfirmQuit,
    ] {
        let mut state = browsing_state();
        state.ui_mode = mode;
        drive(&mut state, Message::Key(InputKey::CharCtrl('c')));
        assert!(state.should_quit(), "{mode:?}");
    }
}

#[test]
fn test_quit_with_favorites_confirms() {
    let mut state = browsing_state();
    drive(&mut state, Message::ToggleFavorite { id: "a".into() });
    drive(&mut state, Message::Key(InputKey::Char('q')));
    assert_eq!(state.ui_mode, UiMode::ConfirmQuit);
    drive(&mut state, Message::Key(InputKey::Char('n')));
    assert_eq!(state.ui_mode, UiMode::Browse);
    drive(&mut state, Message::Key(InputKey::Char('q')));
    drive(&mut state, Message::Key(InputKey::Char('y')));
    assert!(state.should_quit());
}

#[test]
fn test_pagination_focus_activates_pages() {
    let mut state = browsing_state();
    let plan = only_plan(drive(&mut state, Message::Fetch(FetchParams::initial())));
    complete(&mut state, &plan, 50, 150);

    drive(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.ui_mode, UiMode::Pagination);
    drive(&mut state, Message::Key(InputKey::Right));
    let plan = only_plan(drive(&mut state, Message::Key(InputKey::Enter)));
    match plan {
        FetchPlan::Search { query, .. } => assert_eq!(query.from, 50),
        other => panic!("unexpected plan {other:?}"),
    }
    drive(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Browse);
}
