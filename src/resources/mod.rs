// SPDX-License-Identifier: MPL-2.0
//! Static resources for the sign-in screen: localized strings, images and
//! fonts.
//!
//! The [`ResourceProvider`] trait is the seam between the form controller and
//! whatever supplies its assets. [`EmbeddedResources`] is the implementation
//! used by the application; everything it serves is compiled into the binary.

pub mod fonts;
pub mod images;

use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::sign_in::Locale;
use iced::widget::svg;
use iced::Font;

/// Resource keys used by the sign-in screen.
pub mod keys {
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const LOGIN: &str = "login";
    pub const FORGOT_USERNAME_PASSWORD: &str = "forgot_username_password";
    pub const NEED_HELP: &str = "need_help";
    pub const CONTACT_US: &str = "contact_us";
    pub const OUR_PRODUCTS: &str = "our_products";
    pub const EXCHANGE_RATE: &str = "exchange_rate";
    pub const SECURITY_TIPS: &str = "security_tips";
    pub const NEAREST_BRANCH_OR_ATM: &str = "nearest_branch_or_atm";
    /// Label of the language toggle; always names the *other* language.
    pub const AR_TO_EN: &str = "AR_to_EN";
    pub const SHOW_PASSWORD: &str = "show_password";
    pub const HIDE_PASSWORD: &str = "hide_password";
    pub const LOGO_DESCRIPTION: &str = "logo_description";
    pub const WINDOW_TITLE: &str = "window_title";

    // Accessible descriptions of the tile images.
    pub const OUR_PRODUCTS_DESCRIPTION: &str = "our_products_description";
    pub const EXCHANGE_RATE_DESCRIPTION: &str = "exchange_rate_description";
    pub const SECURITY_TIPS_DESCRIPTION: &str = "security_tips_description";
    pub const NEAREST_BRANCH_OR_ATM_DESCRIPTION: &str = "nearest_branch_or_atm_description";

    /// Every string key the screen resolves.
    pub const ALL_STRINGS: [&str; 19] = [
        USERNAME,
        PASSWORD,
        LOGIN,
        FORGOT_USERNAME_PASSWORD,
        NEED_HELP,
        CONTACT_US,
        OUR_PRODUCTS,
        EXCHANGE_RATE,
        SECURITY_TIPS,
        NEAREST_BRANCH_OR_ATM,
        AR_TO_EN,
        SHOW_PASSWORD,
        HIDE_PASSWORD,
        LOGO_DESCRIPTION,
        WINDOW_TITLE,
        OUR_PRODUCTS_DESCRIPTION,
        EXCHANGE_RATE_DESCRIPTION,
        SECURITY_TIPS_DESCRIPTION,
        NEAREST_BRANCH_OR_ATM_DESCRIPTION,
    ];

    // Image keys. Tile images share their label key.
    pub const LOGO: &str = "logo";
    pub const VISIBILITY: &str = "visibility";
    pub const VISIBILITY_OFF: &str = "visibility_off";

    pub const ALL_IMAGES: [&str; 7] = [
        LOGO,
        OUR_PRODUCTS,
        EXCHANGE_RATE,
        SECURITY_TIPS,
        NEAREST_BRANCH_OR_ATM,
        VISIBILITY,
        VISIBILITY_OFF,
    ];

    // Font keys.
    pub const CAIRO_EXTRABOLD: &str = "cairo_extrabold";
    pub const ROBOTO_REGULAR: &str = "roboto_regular";
    pub const ROBOTO_MEDIUM: &str = "roboto_medium";
}

/// Read-only source of localized strings, images and fonts.
pub trait ResourceProvider {
    /// Localized string for `key`.
    fn get_string(&self, key: &str, locale: Locale) -> String;

    /// Image handle for `key`, if such an image exists.
    fn get_image(&self, key: &str) -> Option<svg::Handle>;

    /// Font for `key`; unknown keys get the default font.
    fn get_font(&self, key: &str) -> Font;
}

/// Resources compiled into the binary.
#[derive(Debug)]
pub struct EmbeddedResources {
    i18n: I18n,
    images: images::ImageCache,
}

impl EmbeddedResources {
    /// Parses the embedded translations and prepares the image handles.
    pub fn load() -> Result<Self> {
        Ok(Self {
            i18n: I18n::load()?,
            images: images::ImageCache::load(),
        })
    }
}

impl ResourceProvider for EmbeddedResources {
    fn get_string(&self, key: &str, locale: Locale) -> String {
        self.i18n.tr(locale, key)
    }

    fn get_image(&self, key: &str) -> Option<svg::Handle> {
        self.images.get(key)
    }

    fn get_font(&self, key: &str) -> Font {
        fonts::font(key)
    }
}
