// SPDX-License-Identifier: MPL-2.0
//! Form state backing one sign-in screen.

use super::locale::{Locale, TextDirection};

/// Whether the login action is available for the given field values.
///
/// Both fields must contain something other than whitespace.
#[must_use]
pub fn login_enabled(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.trim().is_empty()
}

/// Mutable data behind the sign-in screen.
///
/// Derived values (`login_enabled`, `text_direction`) are computed on
/// demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    username: String,
    password: String,
    password_visible: bool,
    locale: Locale,
}

impl FormState {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_username(&mut self, text: String) {
        self.username = text;
    }

    pub fn set_password(&mut self, text: String) {
        self.password = text;
    }

    pub fn toggle_password_visible(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    #[must_use]
    pub fn login_enabled(&self) -> bool {
        login_enabled(&self.username, &self.password)
    }

    #[must_use]
    pub fn text_direction(&self) -> TextDirection {
        self.locale.direction()
    }
}
