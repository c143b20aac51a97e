// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Theme};

/// Screen background.
pub fn screen(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// One-pixel separator between the form and the tiles.
pub fn divider(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.divider)),
        ..Default::default()
    }
}
