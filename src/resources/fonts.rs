// SPDX-License-Identifier: MPL-2.0
//! Font lookup by key.
//!
//! Fonts are referenced by family name; when a family is not installed
//! the renderer falls back to its default sans-serif face.

use super::keys;
use iced::font::{Family, Weight};
use iced::Font;

pub const CAIRO: &str = "Cairo";
pub const ROBOTO: &str = "Roboto";

/// Font registered under `key`, or [`Font::DEFAULT`].
#[must_use]
pub fn font(key: &str) -> Font {
    match key {
        keys::CAIRO_EXTRABOLD => Font {
            family: Family::Name(CAIRO),
            weight: Weight::ExtraBold,
            ..Font::DEFAULT
        },
        keys::ROBOTO_REGULAR => Font {
            family: Family::Name(ROBOTO),
            weight: Weight::Normal,
            ..Font::DEFAULT
        },
        keys::ROBOTO_MEDIUM => Font {
            family: Family::Name(ROBOTO),
            weight: Weight::Medium,
            ..Font::DEFAULT
        },
        _ => Font::DEFAULT,
    }
}

/// `base` with its weight replaced.
#[must_use]
pub fn with_weight(base: Font, weight: Weight) -> Font {
    Font { weight, ..base }
}
