// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the sign-in screen picks per theme. Brand red is shared.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub text_primary: Color,
    /// Field labels and outlines.
    pub text_secondary: Color,
    pub divider: Color,
    pub brand: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
            divider: palette::GRAY_100,
            brand: palette::BRAND_RED,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            divider: palette::GRAY_600,
            brand: palette::BRAND_RED_LIGHT,
        }
    }

    /// Scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The sign-in screen is designed light-first, so detection errors fall back to light.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
