// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen: form state, controller, view model and Iced view.
//!
//! Follows the "state down, messages up" pattern used by every screen:
//!
//! ```text
//! view(&ViewModel) --Message--> SignIn::update --Event--> App
//!        ^                            |
//!        +------ SignIn::render <-----+
//! ```
//!
//! [`SignIn`] owns the only [`FormState`]. [`SignIn::render`] is a pure
//! projection; the view draws the [`ViewModel`] and nothing else.

mod controller;
mod locale;
mod state;
mod view;
mod view_model;

pub use controller::{Credentials, SignIn, SubmitHandler};
pub use locale::{Locale, TextDirection};
pub use state::{login_enabled, FormState};
pub use view::view;
pub use view_model::{
    Header, HelpLine, Label, LoginButton, PasswordField, TextField, Tile, ViewModel, VisibilityIcon,
    CONTACT_URL, TILE_DESCRIPTION_KEYS, TILE_KEYS,
};

/// Input events reported by the sign-in view.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    ToggleVisibility,
    ToggleLocale,
    Submit,
    ContactUs,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The language changed; window title and layout direction follow.
    LocaleChanged(Locale),
    /// The form was submitted with login enabled.
    Submitted,
    /// The host should open this URL with the platform link handler.
    OpenLink(&'static str),
}
