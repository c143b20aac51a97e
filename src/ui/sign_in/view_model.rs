// SPDX-License-Identifier: MPL-2.0
//! Render-ready projection of [`FormState`].
//!
//! [`project`] is a pure function of the form state and resource lookups;
//! the view reads nothing else.

use super::locale::{Locale, TextDirection};
use super::state::FormState;
use crate::resources::{keys, ResourceProvider};
use iced::widget::svg;
use iced::Font;

/// Destination of the "contact us" link.
pub const CONTACT_URL: &str = "https://www.banquemisr.com/";

/// Promotional tiles, in display order.
pub const TILE_KEYS: [&str; 4] = [
    keys::OUR_PRODUCTS,
    keys::EXCHANGE_RATE,
    keys::SECURITY_TIPS,
    keys::NEAREST_BRANCH_OR_ATM,
];

/// Image descriptions of the tiles, parallel to [`TILE_KEYS`].
pub const TILE_DESCRIPTION_KEYS: [&str; 4] = [
    keys::OUR_PRODUCTS_DESCRIPTION,
    keys::EXCHANGE_RATE_DESCRIPTION,
    keys::SECURITY_TIPS_DESCRIPTION,
    keys::NEAREST_BRANCH_OR_ATM_DESCRIPTION,
];

/// A resolved string plus the font it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font: Font,
}

/// Which eye glyph the password toggle shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityIcon {
    /// Open eye, shown while the password is readable.
    Visible,
    /// Struck-through eye, shown while the password is masked.
    Hidden,
}

impl VisibilityIcon {
    #[must_use]
    pub fn image_key(self) -> &'static str {
        match self {
            VisibilityIcon::Visible => keys::VISIBILITY,
            VisibilityIcon::Hidden => keys::VISIBILITY_OFF,
        }
    }

    /// String key describing what pressing the toggle does.
    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            VisibilityIcon::Visible => keys::HIDE_PASSWORD,
            VisibilityIcon::Hidden => keys::SHOW_PASSWORD,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    pub logo: Option<svg::Handle>,
    pub logo_description: String,
    pub language_toggle: Label,
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub label: Label,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct PasswordField {
    pub label: Label,
    pub value: String,
    /// Draw the value as bullets.
    pub masked: bool,
    pub icon: VisibilityIcon,
    pub icon_image: Option<svg::Handle>,
    pub icon_description: String,
}

#[derive(Debug, Clone)]
pub struct LoginButton {
    pub label: Label,
    pub enabled: bool,
}

/// "Need help? Contact us" line.
#[derive(Debug, Clone)]
pub struct HelpLine {
    pub prompt: Label,
    pub link: Label,
    pub url: &'static str,
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub key: &'static str,
    pub label: Label,
    pub image: Option<svg::Handle>,
    /// Accessible description of `image`; drawn in its place when missing.
    pub image_description: String,
}

/// Everything the rendering surface needs to draw the screen.
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub locale: Locale,
    pub direction: TextDirection,
    pub header: Header,
    pub username: TextField,
    pub password: PasswordField,
    pub forgot: Label,
    pub login: LoginButton,
    pub help: HelpLine,
    pub tiles: Vec<Tile>,
}

/// Projects `state` into a [`ViewModel`], resolving every label in the
/// state's locale.
#[must_use]
pub fn project(state: &FormState, resources: &dyn ResourceProvider) -> ViewModel {
    let locale = state.locale();
    let label = |key: &str, font_key: &str| Label {
        text: resources.get_string(key, locale),
        font: resources.get_font(font_key),
    };

    let icon = if state.password_visible() {
        VisibilityIcon::Visible
    } else {
        VisibilityIcon::Hidden
    };

    ViewModel {
        locale,
        direction: state.text_direction(),
        header: Header {
            logo: resources.get_image(keys::LOGO),
            logo_description: resources.get_string(keys::LOGO_DESCRIPTION, locale),
            language_toggle: label(keys::AR_TO_EN, keys::CAIRO_EXTRABOLD),
        },
        username: TextField {
            label: label(keys::USERNAME, keys::ROBOTO_MEDIUM),
            value: state.username().to_string(),
        },
        password: PasswordField {
            label: label(keys::PASSWORD, keys::ROBOTO_MEDIUM),
            value: state.password().to_string(),
            masked: !state.password_visible(),
            icon,
            icon_image: resources.get_image(icon.image_key()),
            icon_description: resources.get_string(icon.description_key(), locale),
        },
        forgot: label(keys::FORGOT_USERNAME_PASSWORD, keys::ROBOTO_REGULAR),
        login: LoginButton {
            label: label(keys::LOGIN, keys::ROBOTO_MEDIUM),
            enabled: state.login_enabled(),
        },
        help: HelpLine {
            prompt: label(keys::NEED_HELP, keys::ROBOTO_REGULAR),
            link: label(keys::CONTACT_US, keys::ROBOTO_MEDIUM),
            url: CONTACT_URL,
        },
        tiles: TILE_KEYS
            .into_iter()
            .zip(TILE_DESCRIPTION_KEYS)
            .map(|(key, description_key)| Tile {
                key,
                label: label(key, keys::ROBOTO_REGULAR),
                image: resources.get_image(key),
                image_description: resources.get_string(description_key, locale),
            })
            .collect(),
    }
}
