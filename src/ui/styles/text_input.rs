// SPDX-License-Identifier: MPL-2.0
//! Outlined text field style.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input::{Status, Style};
use iced::{Border, Color, Theme};

/// Gray outline in every state; focus only thickens it.
pub fn outlined(theme: &Theme, status: Status) -> Style {
    let scheme = ColorScheme::for_theme(theme);
    let width = match status {
        Status::Focused { .. } => border::WIDTH_MD,
        _ => border::WIDTH_SM,
    };

    Style {
        background: scheme.surface.into(),
        border: Border {
            color: scheme.text_secondary,
            width,
            radius: radius::SM.into(),
        },
        icon: scheme.text_secondary,
        placeholder: scheme.text_secondary,
        value: scheme.text_primary,
        selection: Color {
            a: 0.3,
            ..scheme.brand
        },
    }
}
