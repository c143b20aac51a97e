// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the sign-in screen, following the W3C Design Tokens
standard.

## Organization

- **Palette**: Brand and neutral colors
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use iced_signin::ui::design_tokens::{palette, spacing};

let accent = palette::BRAND_RED;
let padding = spacing::LG; // 20px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Neutrals
    pub const GRAY_900: Color = Color::from_rgb(0.125, 0.129, 0.141);
    pub const GRAY_600: Color = Color::from_rgb(0.373, 0.388, 0.408); // Field labels
    pub const GRAY_300: Color = Color::from_rgb(0.741, 0.753, 0.769);
    pub const GRAY_100: Color = Color::from_rgb(0.855, 0.863, 0.878); // Divider

    // Brand
    pub const BRAND_RED: Color = Color::from_rgb(0.549, 0.114, 0.251);
    pub const BRAND_RED_HOVER: Color = Color::from_rgb(0.631, 0.173, 0.318);
    pub const BRAND_RED_PRESSED: Color = Color::from_rgb(0.471, 0.086, 0.208);
    /// Login button while disabled.
    pub const BRAND_RED_LIGHT: Color = Color::from_rgb(0.851, 0.647, 0.702);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    /// Screen padding.
    pub const LG: f32 = 20.0;
    /// Gap above the divider that separates the form from the tiles.
    pub const XXL: f32 = 60.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const LOGO: f32 = 106.0;
    pub const ICON_MD: f32 = 24.0;
    pub const TILE_ICON: f32 = 48.0;
    pub const LOGIN_BUTTON_HEIGHT: f32 = 44.0;
    /// Touch target around the password visibility toggle.
    pub const ICON_BUTTON: f32 = 40.0;
    /// Width the form is capped at on large windows.
    pub const FORM_MAX_WIDTH: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Login button label.
    pub const BUTTON: f32 = 18.0;

    /// Language toggle, field values.
    pub const BODY_LG: f32 = 16.0;

    /// Field labels, tile captions.
    pub const BODY: f32 = 14.0;

    /// Forgot/help links.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    /// Login button; 20% of its height.
    pub const BUTTON: f32 = 9.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::LOGO > sizing::TILE_ICON);
    assert!(sizing::TILE_ICON > sizing::ICON_MD);
    assert!(sizing::ICON_BUTTON >= sizing::ICON_MD);

    assert!(typography::BUTTON > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::BUTTON > radius::SM);
};
