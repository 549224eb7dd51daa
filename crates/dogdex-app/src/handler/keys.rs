//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_interrupt() {
        return Some(Message::Quit);
    }
    match state.ui_mode {
        UiMode::SignIn => handle_key_sign_in(state, key),
        UiMode::Browse => handle_key_browse(key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Pagination => handle_key_pagination(key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows "qq" as a quick quit
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}

fn handle_key_sign_in(state: &AppState, key: InputKey) -> Option<Message> {
    if state.sign_in.submitting {
        return match key {
            InputKey::Esc => Some(Message::Quit),
            _ => None,
        };
    }
    match key {
        InputKey::Esc => Some(Message::Quit),
        InputKey::Enter => Some(Message::SubmitSignIn),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::SignInNextField)
        }
        InputKey::Backspace => Some(Message::SignInBackspace),
        InputKey::Char(c) => Some(Message::SignInChar(c)),
        _ => None,
    }
}

fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Char('S') => Some(Message::SignOut),

        // Search box
        InputKey::Char('/' | 's') => Some(Message::EnterSearch),
        InputKey::Char('f') => Some(Message::ToggleFavoritesMode),
        InputKey::Char('o') => Some(Message::ToggleOrder),
        InputKey::Char('m') => Some(Message::FindMatch),

        // Gallery
        InputKey::Char(' ' | 'x') | InputKey::Enter => Some(Message::ToggleSelectedFavorite),
        InputKey::Right | InputKey::Char('l') => Some(Message::GalleryNext),
        InputKey::Left | InputKey::Char('h') => Some(Message::GalleryPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::GalleryRowDown),
        InputKey::Up | InputKey::Char('k') => Some(Message::GalleryRowUp),
        InputKey::Home | InputKey::Char('g') => Some(Message::GalleryFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::GalleryLast),

        // Pages
        InputKey::PageDown | InputKey::Char(']' | 'n') => Some(Message::NextPage),
        InputKey::PageUp | InputKey::Char('[' | 'p') => Some(Message::PreviousPage),
        InputKey::Char('.') => Some(Message::ExpandPages),
        InputKey::Char('<') => Some(Message::ShiftPagesLeft),
        InputKey::Char('>') => Some(Message::ShiftPagesRight),
        InputKey::Tab => Some(Message::FocusPagination),

        _ => None,
    }
}

fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Close the dropdown, keep the text
        InputKey::Esc => Some(Message::SearchDismiss),
        InputKey::Enter => Some(Message::SearchSubmit),

        InputKey::Down | InputKey::Tab => Some(Message::SearchHighlightNext),
        InputKey::Up | InputKey::BackTab => Some(Message::SearchHighlightPrevious),

        InputKey::Backspace => {
            let mut query = state.search_box.query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut query = state.search_box.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

fn handle_key_pagination(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::PaginationFocusLeft),
        InputKey::Right | InputKey::Char('l') => Some(Message::PaginationFocusRight),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::PaginationActivate),
        InputKey::Esc | InputKey::Tab | InputKey::BackTab => Some(Message::FocusGallery),
        InputKey::Char('q') => Some(Message::RequestQuit),
        _ => None,
    }
}
