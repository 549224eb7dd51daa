//! Message types for the application (TEA pattern)

use dogdex_core::{Dog, SearchSelection, ViewMode};

use crate::fetch::{FetchParams, RequestId};
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may ask for confirmation while favorites exist)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Sign-in
    // ─────────────────────────────────────────────────────────
    SignInChar(char),
    SignInBackspace,
    SignInNextField,
    SubmitSignIn,

    /// Session cookie established
    LoginSucceeded { name: String },

    LoginFailed { error: String },

    /// User asked to sign out
    SignOut,

    /// Server acknowledged (or failed) the sign-out
    LoggedOut { error: Option<String> },

    // ─────────────────────────────────────────────────────────
    // Breed corpus
    // ─────────────────────────────────────────────────────────
    BreedsLoaded { breeds: Vec<String> },

    /// Breeds could not be loaded; treated as an expired session
    BreedsFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Search box
    // ─────────────────────────────────────────────────────────
    /// Focus the breed search input
    EnterSearch,

    /// Search text changed
    SearchInput { text: String },

    SearchHighlightNext,
    SearchHighlightPrevious,

    /// Enter in the search input
    SearchSubmit,

    /// Esc in the search input: close the dropdown, keep the text
    SearchDismiss,

    ToggleFavoritesMode,
    ToggleOrder,

    /// Ask for a match among favorites
    FindMatch,

    /// Committed search box selection
    Selection(SearchSelection),

    // ─────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────
    GalleryNext,
    GalleryPrevious,
    GalleryFirst,
    GalleryLast,
    /// Move by a row of the grid
    GalleryRowDown,
    GalleryRowUp,

    /// Favorite or unfavorite the dog under the cursor
    ToggleSelectedFavorite,
    ToggleFavorite { id: String },

    // ─────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────
    NextPage,
    PreviousPage,
    ExpandPages,
    ShiftPagesLeft,
    ShiftPagesRight,

    /// Move keyboard focus into the page controls
    FocusPagination,
    /// Return keyboard focus to the gallery
    FocusGallery,
    PaginationFocusLeft,
    PaginationFocusRight,
    PaginationActivate,

    /// A page was chosen; load it
    PageChanged { page: u32 },

    // ─────────────────────────────────────────────────────────
    // Fetching
    // ─────────────────────────────────────────────────────────
    Fetch(FetchParams),

    FetchCompleted {
        request_id: RequestId,
        mode: ViewMode,
        dogs: Vec<Dog>,
        total: u64,
    },

    FetchFailed {
        request_id: RequestId,
        error: String,
        /// The service rejected the session cookie
        session_expired: bool,
    },

    MatchFound { id: String },

    MatchFailed {
        error: String,
        session_expired: bool,
    },
}
