//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use dogdex_core::{AppPhase, Dog, ViewMode};

use crate::config::Settings;
use crate::favorites::FavoriteSet;
use crate::fetch::{FetchOrchestrator, RequestId};
use crate::fuzzy::FuzzyIndex;
use crate::gallery::GalleryState;
use crate::pagination::PaginationState;
use crate::search_box::SearchBoxState;
use crate::sign_in::SignInForm;

/// Cards per row in the gallery grid
pub const GALLERY_COLUMNS: usize = 3;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Sign-in form
    #[default]
    SignIn,
    /// Gallery has keyboard focus
    Browse,
    /// Typing in the breed search input
    SearchInput,
    /// Page controls have keyboard focus
    Pagination,
    /// Quit confirmation dialog
    ConfirmQuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line notice under the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub at: DateTime<Local>,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
            at: Local::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
            at: Local::now(),
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    /// Mode to return to when the quit dialog is cancelled
    previous_mode: UiMode,

    pub settings: Settings,

    pub sign_in: SignInForm,
    /// Signed-in user's name
    pub user_name: Option<String>,

    pub breed_index: FuzzyIndex,
    pub search_box: SearchBoxState,
    pub favorites: FavoriteSet,
    pub pagination: PaginationState,
    pub orchestrator: FetchOrchestrator,
    pub gallery: GalleryState,

    /// Request whose results are still awaited
    pub loading: Option<RequestId>,
    /// A match request is in flight
    pub match_pending: bool,
    pub status: Option<StatusMessage>,
    /// When the gallery contents were last replaced
    pub last_loaded: Option<DateTime<Local>>,

    /// Ticks since start, drives the loading spinner
    pub tick_count: u64,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let page_size = settings.browse.page_size;
        let sign_in = SignInForm::prefilled(settings.user.name.clone(), settings.user.email.clone());
        Self {
            phase: AppPhase::SignedOut,
            ui_mode: UiMode::SignIn,
            previous_mode: UiMode::SignIn,
            sign_in,
            user_name: None,
            breed_index: FuzzyIndex::new(Vec::new(), settings.search.threshold),
            search_box: SearchBoxState::new(settings.search.max_suggestions),
            favorites: FavoriteSet::new(),
            pagination: PaginationState::new(page_size),
            orchestrator: FetchOrchestrator::new(page_size),
            gallery: GalleryState::default(),
            loading: None,
            match_pending: false,
            status: None,
            last_loaded: None,
            tick_count: 0,
            settings,
        }
    }

    /// Which data source feeds the gallery
    pub fn view_mode(&self) -> ViewMode {
        self.orchestrator.mode()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn selected_dog(&self) -> Option<&Dog> {
        self.gallery.selected_dog()
    }

    /// Page controls are hidden for a single matched dog
    pub fn pagination_visible(&self) -> bool {
        self.view_mode() != ViewMode::Match
    }

    /// Message shown when the gallery is empty
    pub fn empty_message(&self) -> &'static str {
        match self.view_mode() {
            ViewMode::Favorites => "You have no favorites yet",
            _ => "No dogs to show",
        }
    }

    /// Enter the browsing phase after a successful login
    pub fn begin_browsing(&mut self, name: String) {
        self.sign_in.succeed();
        self.user_name = Some(name);
        self.phase = AppPhase::Browsing;
        self.ui_mode = UiMode::Browse;
    }

    /// Drop everything tied to the session and show the sign-in form
    ///
    /// Favorites are session-local and are lost here.
    pub fn end_session(&mut self, notice: Option<String>) {
        self.phase = AppPhase::SignedOut;
        self.ui_mode = UiMode::SignIn;
        self.user_name = None;
        self.sign_in.submitting = false;
        self.sign_in.error = notice;
        self.breed_index = FuzzyIndex::new(Vec::new(), self.settings.search.threshold);
        self.search_box.reset();
        self.favorites.clear();
        self.pagination = PaginationState::new(self.settings.browse.page_size);
        self.orchestrator.reset();
        self.gallery.clear();
        self.loading = None;
        self.match_pending = false;
        self.status = None;
        self.last_loaded = None;
    }

    // ─────────────────────────────────────────────────────────
    // Quit handling
    // ─────────────────────────────────────────────────────────

    /// Request to quit; asks first when favorites would be lost
    pub fn request_quit(&mut self) {
        if !self.favorites.is_empty() && self.settings.behavior.confirm_quit {
            self.previous_mode = self.ui_mode;
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = self.previous_mode;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
