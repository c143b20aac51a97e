// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localized strings come from Fluent `.ftl` files embedded at build time,
//! one per supported locale (`assets/i18n/en.ftl`, `assets/i18n/ar.ftl`).
//! Lookups take the locale explicitly, so switching language is just a
//! matter of asking for a different one.

pub mod fluent;
