// SPDX-License-Identifier: MPL-2.0
//! Supported display languages and the text direction each implies.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// Languages the sign-in screen can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Layout direction for text and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// The other locale. Toggling twice yields the original.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    #[must_use]
    pub fn direction(self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Ar => TextDirection::Rtl,
        }
    }

    /// Primary language subtag, also the translation file stem.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Parses a BCP-47 tag, matching on the language subtag only
    /// (`en-US` and `ar-EG` are accepted).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let langid: LanguageIdentifier = code.trim().parse().ok()?;
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == langid.language.as_str())
    }

    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Locale::En => unic_langid::langid!("en"),
            Locale::Ar => unic_langid::langid!("ar"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TextDirection {
    #[must_use]
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}
