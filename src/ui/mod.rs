// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The UI follows the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`sign_in`] - Sign-in form with language toggle and quick-access tiles
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, text inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod sign_in;
pub mod styles;
pub mod theming;
