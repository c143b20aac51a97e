// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use crate::ui::sign_in::Locale;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// One Fluent bundle per supported [`Locale`], loaded from the embedded
/// `.ftl` files.
pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl I18n {
    /// Loads the translation file of every supported locale.
    ///
    /// Fails if a file is missing, does not parse, or defines a message twice.
    pub fn load() -> Result<Self> {
        let mut bundles = HashMap::new();

        for locale in Locale::ALL {
            let filename = format!("{}.ftl", locale.code());
            let content = Asset::get(&filename)
                .ok_or_else(|| Error::I18n(format!("missing translation file {filename}")))?;
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::I18n(format!("{filename}: {} parse error(s)", errors.len()))
            })?;

            let mut bundle = FluentBundle::new(vec![locale.langid()]);
            // Arabic labels are shown in plain widgets, so no bidi isolation marks.
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| Error::I18n(format!("{filename}: {errors:?}")))?;
            bundles.insert(locale, bundle);
        }

        log::debug!("loaded {} translation bundles", bundles.len());
        Ok(Self { bundles })
    }

    /// Resolves `key` in `locale`, or `MISSING: key` when it has no value.
    pub fn tr(&self, locale: Locale, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        log::warn!("no translation for {key:?} in {locale}");
        format!("MISSING: {}", key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::keys;

    fn i18n() -> I18n {
        I18n::load().expect("embedded translations should load")
    }

    #[test]
    fn every_screen_key_is_translated_in_every_locale() {
        let i18n = i18n();
        for locale in Locale::ALL {
            for key in keys::ALL_STRINGS {
                let value = i18n.tr(locale, key);
                assert!(!value.starts_with("MISSING:"), "{key} missing in {locale}");
                assert!(!value.is_empty());
            }
        }
    }

    #[test]
    fn login_differs_between_locales() {
        let i18n = i18n();
        assert_eq!(i18n.tr(Locale::En, keys::LOGIN), "Login");
        assert_eq!(i18n.tr(Locale::Ar, keys::LOGIN), "تسجيل الدخول");
    }

    #[test]
    fn language_toggle_names_the_other_language() {
        let i18n = i18n();
        assert_eq!(i18n.tr(Locale::En, keys::AR_TO_EN), "العربية");
        assert_eq!(i18n.tr(Locale::Ar, keys::AR_TO_EN), "English");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = i18n();
        assert_eq!(i18n.tr(Locale::En, "no-such-key"), "MISSING: no-such-key");
        assert_eq!(i18n.tr(Locale::Ar, "no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn translations_carry_no_isolation_marks() {
        let i18n = i18n();
        for key in keys::ALL_STRINGS {
            let value = i18n.tr(Locale::Ar, key);
            assert!(!value.contains('\u{2068}') && !value.contains('\u{2069}'));
        }
    }
}
