//! Custom widget components

mod confirm_dialog;
mod dog_gallery;
mod header;
pub mod modal_overlay;
mod pagination;
mod search_bar;
mod sign_in;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use dog_gallery::DogGallery;
pub use header::MainHeader;
pub use pagination::PaginationBar;
pub use search_bar::{SearchBar, SuggestionList};
pub use sign_in::SignInPanel;
pub use status_bar::{spinner_frame, StatusBar};
