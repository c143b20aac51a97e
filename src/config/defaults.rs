// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width, sized like a phone screen in portrait.
pub const DEFAULT_WINDOW_WIDTH: u32 = 420;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 820;

/// Minimum window width; below this the four tiles stop fitting on one row.
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Maximum window dimension accepted from the config file.
pub const MAX_WINDOW_DIMENSION: u32 = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(DEFAULT_WINDOW_WIDTH <= MAX_WINDOW_DIMENSION);
    assert!(DEFAULT_WINDOW_HEIGHT <= MAX_WINDOW_DIMENSION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_are_portrait() {
        assert!(DEFAULT_WINDOW_HEIGHT > DEFAULT_WINDOW_WIDTH);
        assert!(MIN_WINDOW_HEIGHT > MIN_WINDOW_WIDTH);
    }
}
