// SPDX-License-Identifier: MPL-2.0
//! `iced_signin` is a single-screen bank sign-in form built with the Iced GUI
//! framework.
//!
//! It renders a bilingual (English/Arabic) login screen with right-to-left
//! layout support, Fluent-based localization, and user preferences loaded
//! from a small TOML file.

#![doc(html_root_url = "https://docs.rs/iced_signin/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod resources;
pub mod ui;
