//! Sign-in form state

use dogdex_api::LoginRequest;
use dogdex_core::prelude::*;

/// Shown when either field is left blank
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInField {
    #[default]
    Name,
    Email,
}

impl SignInField {
    pub fn next(self) -> Self {
        match self {
            SignInField::Name => SignInField::Email,
            SignInField::Email => SignInField::Name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub name: String,
    pub email: String,
    pub focus: SignInField,
    /// Validation or login failure shown under the form
    pub error: Option<String>,
    /// Login request in flight
    pub submitting: bool,
}

impl SignInForm {
    /// Form with values from the command line or config
    pub fn prefilled(name: Option<String>, email: Option<String>) -> Self {
        let name = name.unwrap_or_default();
        let focus = if name.is_empty() {
            SignInField::Name
        } else {
            SignInField::Email
        };
        Self {
            name,
            email: email.unwrap_or_default(),
            focus,
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            SignInField::Name => &mut self.name,
            SignInField::Email => &mut self.email,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.field_mut().push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    /// Validate and build the login body
    ///
    /// Blank fields set [`FILL_ALL_FIELDS`] and nothing is sent.
    pub fn submit(&mut self) -> Result<LoginRequest> {
        if self.submitting {
            return Err(Error::validation("Sign-in already in progress"));
        }
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            self.error = Some(FILL_ALL_FIELDS.to_string());
            return Err(Error::validation(FILL_ALL_FIELDS));
        }
        self.error = None;
        self.submitting = true;
        Ok(LoginRequest {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn succeed(&mut self) {
        self.submitting = false;
        self.error = None;
    }
}
