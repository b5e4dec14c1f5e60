//! Locale-aware numeral rendering.
//!
//! # Responsibility
//! - Render chapter, verse and count numbers in the active language's digits.
//!
//! # Invariants
//! - Formatting is presentational; numeric values are never altered.
//! - Only `ar` uses Eastern Arabic glyphs; every other language uses ASCII.

use crate::model::language::LanguageCode;

const EASTERN_ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Formats a number for display in `language`.
pub fn format_number(value: u64, language: LanguageCode) -> String {
    let decimal = value.to_string();
    match language {
        LanguageCode::Ar => to_eastern_arabic(&decimal),
        LanguageCode::En | LanguageCode::Fr => decimal,
    }
}

/// Maps every ASCII digit in `text` to its Eastern Arabic glyph.
pub fn to_eastern_arabic(text: &str) -> String {
    text.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) if ch.is_ascii_digit() => EASTERN_ARABIC_DIGITS[digit as usize],
            _ => ch,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{format_number, to_eastern_arabic};
    use crate::model::language::LanguageCode;

    #[test]
    fn arabic_uses_eastern_glyphs() {
        assert_eq!(format_number(123, LanguageCode::Ar), "١٢٣");
        assert_eq!(format_number(0, LanguageCode::Ar), "٠");
        assert_eq!(format_number(150, LanguageCode::Ar).chars().count(), 3);
    }

    #[test]
    fn latin_locales_keep_ascii_digits() {
        assert_eq!(format_number(123, LanguageCode::En), "123");
        assert_eq!(format_number(123, LanguageCode::Fr), "123");
    }

    #[test]
    fn conversion_leaves_non_digits_untouched() {
        assert_eq!(to_eastern_arabic("2-4."), "٢-٤.");
    }
}
