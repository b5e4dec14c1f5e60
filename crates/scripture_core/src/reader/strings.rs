//! Localized reader labels.

use crate::model::language::LanguageCode;
use crate::numerals::format_number;

/// Static label set for the reader screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderStrings {
    pub search_placeholder: &'static str,
    pub select_chapter: &'static str,
    pub chapter: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub no_results: &'static str,
    pub book_not_found: &'static str,
}

const AR: ReaderStrings = ReaderStrings {
    search_placeholder: "ابحث في هذا الفصل...",
    select_chapter: "اختر الفصل",
    chapter: "فصل",
    previous: "السابق",
    next: "التالي",
    no_results: "لا توجد آيات تطابق",
    book_not_found: "الكتاب غير موجود",
};

const EN: ReaderStrings = ReaderStrings {
    search_placeholder: "Search in this chapter...",
    select_chapter: "Select Chapter",
    chapter: "Chapter",
    previous: "Previous",
    next: "Next",
    no_results: "No verses found matching",
    book_not_found: "Book not found",
};

const FR: ReaderStrings = ReaderStrings {
    search_placeholder: "Rechercher dans ce chapitre...",
    select_chapter: "Choisir le chapitre",
    chapter: "Chapitre",
    previous: "Précédent",
    next: "Suivant",
    no_results: "Aucun verset ne correspond à",
    book_not_found: "Livre introuvable",
};

pub fn reader_strings(language: LanguageCode) -> &'static ReaderStrings {
    match language {
        LanguageCode::Ar => &AR,
        LanguageCode::En => &EN,
        LanguageCode::Fr => &FR,
    }
}

/// Builds the chapter heading, e.g. `Chapter 3` or `فصل ٣`.
pub fn chapter_heading(language: LanguageCode, chapter: u32) -> String {
    format!(
        "{} {}",
        reader_strings(language).chapter,
        format_number(u64::from(chapter), language)
    )
}
