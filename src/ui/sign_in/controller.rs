// SPDX-License-Identifier: MPL-2.0
//! Controller owning the sign-in form state.
//!
//! The controller is the only writer of [`FormState`]. Each handler applies
//! one input event; [`SignIn::render`] projects the result for drawing.

use super::locale::Locale;
use super::state::FormState;
use super::view_model::{self, ViewModel, CONTACT_URL};
use super::{Event, Message};
use crate::resources::ResourceProvider;
use std::fmt;

/// Values handed to a [`SubmitHandler`].
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Receives the credentials when the user submits the form.
///
/// Closures taking [`Credentials`] implement this trait.
pub trait SubmitHandler {
    fn submit(&mut self, credentials: Credentials<'_>);
}

impl<F> SubmitHandler for F
where
    F: FnMut(Credentials<'_>),
{
    fn submit(&mut self, credentials: Credentials<'_>) {
        self(credentials);
    }
}

/// Sign-in screen controller.
pub struct SignIn {
    state: FormState,
    on_submit: Option<Box<dyn SubmitHandler>>,
}

impl fmt::Debug for SignIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignIn")
            .field("locale", &self.state.locale())
            .field("login_enabled", &self.state.login_enabled())
            .field("has_submit_handler", &self.on_submit.is_some())
            .finish()
    }
}

impl Default for SignIn {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl SignIn {
    /// Opens a screen with empty fields in `locale`.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            state: FormState::new(locale),
            on_submit: None,
        }
    }

    /// Installs the handler invoked by [`SignIn::submit`].
    #[must_use]
    pub fn with_submit_handler(mut self, handler: impl SubmitHandler + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_username(&mut self, text: String) {
        self.state.set_username(text);
    }

    pub fn set_password(&mut self, text: String) {
        self.state.set_password(text);
    }

    pub fn toggle_visibility(&mut self) {
        self.state.toggle_password_visible();
    }

    /// Switches language. The next [`SignIn::render`] resolves every label
    /// in the new locale and carries its text direction.
    pub fn toggle_locale(&mut self) -> Event {
        self.state.toggle_locale();
        let locale = self.state.locale();
        log::debug!("locale switched to {locale} ({:?})", locale.direction());
        Event::LocaleChanged(locale)
    }

    /// Hands the credentials to the submit handler.
    ///
    /// Does nothing while login is disabled; the button is inert then, so
    /// reaching this is not an error.
    pub fn submit(&mut self) -> Event {
        if !self.state.login_enabled() {
            return Event::None;
        }
        if let Some(handler) = self.on_submit.as_mut() {
            handler.submit(Credentials {
                username: self.state.username(),
                password: self.state.password(),
            });
        }
        Event::Submitted
    }

    /// Projects the current state for the rendering surface.
    #[must_use]
    pub fn render(&self, resources: &dyn ResourceProvider) -> ViewModel {
        view_model::project(&self.state, resources)
    }

    /// Applies one input event from the rendering surface.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::UsernameChanged(text) => {
                self.set_username(text);
                Event::None
            }
            Message::PasswordChanged(text) => {
                self.set_password(text);
                Event::None
            }
            Message::ToggleVisibility => {
                self.toggle_visibility();
                Event::None
            }
            Message::ToggleLocale => self.toggle_locale(),
            Message::Submit => self.submit(),
            Message::ContactUs => Event::OpenLink(CONTACT_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{keys, EmbeddedResources};
    use crate::ui::sign_in::{TextDirection, VisibilityIcon};
    use iced::widget::svg;
    use iced::Font;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Resolves every string to `key@locale` so tests can see which
    /// locale a label came from.
    struct EchoResources;

    impl ResourceProvider for EchoResources {
        fn get_string(&self, key: &str, locale: Locale) -> String {
            format!("{key}@{locale}")
        }

        fn get_image(&self, _key: &str) -> Option<svg::Handle> {
            None
        }

        fn get_font(&self, _key: &str) -> Font {
            Font::DEFAULT
        }
    }

    #[test]
    fn login_enables_only_after_both_fields_are_filled() {
        let mut sign_in = SignIn::default();
        assert!(!sign_in.state().login_enabled());

        sign_in.set_username("alice".to_string());
        assert!(!sign_in.state().login_enabled());

        sign_in.set_password("secret".to_string());
        assert!(sign_in.state().login_enabled());

        sign_in.set_username("   ".to_string());
        assert!(!sign_in.state().login_enabled());
    }

    #[test]
    fn toggle_visibility_twice_restores_value() {
        let mut sign_in = SignIn::default();
        let before = sign_in.state().password_visible();
        sign_in.toggle_visibility();
        assert_ne!(sign_in.state().password_visible(), before);
        sign_in.toggle_visibility();
        assert_eq!(sign_in.state().password_visible(), before);
    }

    #[test]
    fn toggle_locale_reports_new_locale_and_round_trips() {
        let mut sign_in = SignIn::default();
        let event = sign_in.toggle_locale();
        assert!(matches!(event, Event::LocaleChanged(Locale::Ar)));
        assert_eq!(sign_in.state().text_direction(), TextDirection::Rtl);

        let event = sign_in.toggle_locale();
        assert!(matches!(event, Event::LocaleChanged(Locale::En)));
        assert_eq!(sign_in.state().text_direction(), TextDirection::Ltr);
    }

    #[test]
    fn render_resolves_labels_in_current_locale() {
        let mut sign_in = SignIn::default();
        let vm = sign_in.render(&EchoResources);
        assert_eq!(vm.login.label.text, "login@en");
        assert_eq!(vm.direction, TextDirection::Ltr);

        sign_in.toggle_locale();
        let vm = sign_in.render(&EchoResources);
        assert_eq!(vm.login.label.text, "login@ar");
        assert_eq!(vm.username.label.text, "username@ar");
        assert_eq!(vm.header.language_toggle.text, "AR_to_EN@ar");
        assert!(vm.tiles.iter().all(|tile| tile.label.text.ends_with("@ar")));
        assert_eq!(vm.direction, TextDirection::Rtl);
    }

    #[test]
    fn login_label_resolves_to_arabic_after_toggle() {
        let resources = EmbeddedResources::load().expect("resources should load");
        let mut sign_in = SignIn::default();
        assert_eq!(sign_in.render(&resources).login.label.text, "Login");

        sign_in.toggle_locale();
        let vm = sign_in.render(&resources);
        assert_eq!(vm.locale, Locale::Ar);
        assert_eq!(vm.login.label.text, "تسجيل الدخول");
    }

    #[test]
    fn password_glyph_mode_and_icon_follow_visibility() {
        let mut sign_in = SignIn::default();
        let vm = sign_in.render(&EchoResources);
        assert!(vm.password.masked);
        assert_eq!(vm.password.icon, VisibilityIcon::Hidden);
        assert_eq!(vm.password.icon_description, "show_password@en");

        sign_in.toggle_visibility();
        let vm = sign_in.render(&EchoResources);
        assert!(!vm.password.masked);
        assert_eq!(vm.password.icon, VisibilityIcon::Visible);
        assert_eq!(vm.password.icon.image_key(), keys::VISIBILITY);
        assert_eq!(vm.password.icon_description, "hide_password@en");
    }

    #[test]
    fn render_exposes_enabled_flag_and_field_values() {
        let mut sign_in = SignIn::default();
        let _ = sign_in.update(Message::UsernameChanged("alice".to_string()));
        let _ = sign_in.update(Message::PasswordChanged("secret".to_string()));

        let vm = sign_in.render(&EchoResources);
        assert!(vm.login.enabled);
        assert_eq!(vm.username.value, "alice");
        assert_eq!(vm.password.value, "secret");
        assert_eq!(vm.help.url, CONTACT_URL);
        assert_eq!(vm.tiles.len(), 4);
    }

    #[test]
    fn tile_images_carry_localized_descriptions() {
        let mut sign_in = SignIn::default();
        let vm = sign_in.render(&EchoResources);
        let descriptions: Vec<_> = vm
            .tiles
            .iter()
            .map(|tile| tile.image_description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            [
                "our_products_description@en",
                "exchange_rate_description@en",
                "security_tips_description@en",
                "nearest_branch_or_atm_description@en",
            ]
        );

        sign_in.toggle_locale();
        let vm = sign_in.render(&EchoResources);
        assert!(vm
            .tiles
            .iter()
            .all(|tile| tile.image_description.ends_with("_description@ar")));
    }

    #[test]
    fn submit_while_disabled_is_a_silent_no_op() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut sign_in =
            SignIn::default().with_submit_handler(move |_: Credentials<'_>| {
                *counter.borrow_mut() += 1
            });

        sign_in.set_username("alice".to_string());
        assert!(matches!(sign_in.submit(), Event::None));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn submit_passes_credentials_to_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut sign_in = SignIn::default().with_submit_handler(move |c: Credentials<'_>| {
            sink.borrow_mut()
                .push((c.username.to_string(), c.password.to_string()))
        });

        sign_in.set_username("alice".to_string());
        sign_in.set_password("secret".to_string());
        let event = sign_in.update(Message::Submit);

        assert!(matches!(event, Event::Submitted));
        assert_eq!(
            seen.borrow().as_slice(),
            &[("alice".to_string(), "secret".to_string())]
        );
    }

    #[test]
    fn submit_without_handler_still_reports_submission() {
        let mut sign_in = SignIn::default();
        sign_in.set_username("alice".to_string());
        sign_in.set_password("secret".to_string());
        assert!(matches!(sign_in.submit(), Event::Submitted));
    }

    #[test]
    fn contact_us_requests_link() {
        let mut sign_in = SignIn::default();
        let event = sign_in.update(Message::ContactUs);
        assert!(matches!(event, Event::OpenLink(url) if url == CONTACT_URL));
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let credentials = Credentials {
            username: "alice",
            password: "hunter2",
        };
        let printed = format!("{credentials:?}");
        assert!(printed.contains("alice"));
        assert!(!printed.contains("hunter2"));
    }
}
