// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Shadow, Theme};

/// Full-width login button: brand red, light red while disabled.
pub fn login(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => palette::BRAND_RED,
        button::Status::Hovered => palette::BRAND_RED_HOVER,
        button::Status::Pressed => palette::BRAND_RED_PRESSED,
        button::Status::Disabled => palette::BRAND_RED_LIGHT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: background,
            width: 0.0,
            radius: radius::BUTTON.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Text-only button drawn in the brand color (language toggle, help link).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_RED_HOVER,
        _ => scheme.brand,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless icon button (password visibility toggle).
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(
            iced::Color {
                a: 0.12,
                ..scheme.text_secondary
            },
        )),
        _ => None,
    };

    button::Style {
        background,
        text_color: scheme.text_secondary,
        border: Border {
            radius: radius::BUTTON.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
