//! Supported reading languages.
//!
//! # Responsibility
//! - Enumerate the languages the bundled corpus ships with.
//! - Parse loose caller input (`"EN"`, `" fr "`) into a typed code.
//!
//! # Invariants
//! - The set is closed; unknown codes never map to a fallback language.
//! - `LanguageCode::ALL` order is the order shown in the language picker.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Language partition key for the corpus store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Arabic, rendered right-to-left with Eastern Arabic numerals.
    Ar,
    /// English.
    En,
    /// French.
    Fr,
}

impl LanguageCode {
    /// Picker order. The first entry is the startup default.
    pub const ALL: [LanguageCode; 3] = [LanguageCode::Ar, LanguageCode::En, LanguageCode::Fr];

    /// Parses a language code, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for codes outside the supported set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Wire/storage form of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Native display name used by the language picker.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ar => "العربية",
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    /// Whether text in this language is laid out right-to-left.
    ///
    /// Presentation only; lookup and search semantics never branch on it.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language entry as shown by the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: LanguageCode,
    pub name: &'static str,
}

/// Returns all supported languages in picker order.
pub fn supported_languages() -> Vec<Language> {
    LanguageCode::ALL
        .iter()
        .map(|code| Language {
            code: *code,
            name: code.display_name(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{supported_languages, LanguageCode};

    #[test]
    fn parse_accepts_mixed_case_and_padding() {
        assert_eq!(LanguageCode::parse("EN"), Some(LanguageCode::En));
        assert_eq!(LanguageCode::parse(" fr "), Some(LanguageCode::Fr));
        assert_eq!(LanguageCode::parse("ar"), Some(LanguageCode::Ar));
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(LanguageCode::parse("de"), None);
        assert_eq!(LanguageCode::parse(""), None);
    }

    #[test]
    fn default_is_first_picker_entry() {
        assert_eq!(LanguageCode::default(), LanguageCode::Ar);
        assert_eq!(supported_languages()[0].code, LanguageCode::Ar);
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert!(LanguageCode::Ar.is_rtl());
        assert!(!LanguageCode::En.is_rtl());
        assert!(!LanguageCode::Fr.is_rtl());
    }
}
