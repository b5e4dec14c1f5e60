//! Book-browser section filtering.
//!
//! # Responsibility
//! - Build localized testament sections for one language.
//! - Keep books whose localized name or description contains the query.
//!
//! # Invariants
//! - Sections without matching books are dropped.
//! - `BookEntry::position` is the 1-based index inside the filtered
//!   section, assigned after filtering.
//! - Descriptions and icons are resolved by book id.

use crate::catalog::{book_description, book_icon, browser_strings};
use crate::corpus::store::CorpusStore;
use crate::model::book::Testament;
use crate::model::language::LanguageCode;
use crate::numerals::format_number;

/// One row of the book browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub description: &'static str,
    pub icon: &'static str,
    pub chapter_count: usize,
}

impl BookEntry {
    /// Numbered title, e.g. `2. Exodus` or `٢. الخروج`.
    pub fn label(&self, language: LanguageCode) -> String {
        format!(
            "{}. {}",
            format_number(self.position as u64, language),
            self.name
        )
    }

    /// Chapter count caption, e.g. `50 ch` or `٥٠ فصل`.
    pub fn chapters_label(&self, language: LanguageCode) -> String {
        format!(
            "{} {}",
            format_number(self.chapter_count as u64, language),
            browser_strings(language).chapters_abbrev
        )
    }
}

/// One testament section of the book browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSection {
    pub testament: Testament,
    pub title: &'static str,
    pub description: &'static str,
    pub books: Vec<BookEntry>,
}

/// Filters both testament sections of `language` by `query`.
///
/// Matching is a case-insensitive substring test on the book name and the
/// localized description, using `query` as typed. An empty query keeps
/// every book.
pub fn search_books(store: &CorpusStore, language: LanguageCode, query: &str) -> Vec<BookSection> {
    let needle = query.to_lowercase();
    let strings = browser_strings(language);

    Testament::ALL
        .iter()
        .filter_map(|testament| {
            let books = store
                .books_by_language_and_testament(language, *testament)
                .iter()
                .map(|book| (book, book_description(language, &book.id)))
                .filter(|(book, description)| {
                    needle.is_empty()
                        || book.name.to_lowercase().contains(needle.as_str())
                        || description.to_lowercase().contains(needle.as_str())
                })
                .enumerate()
                .map(|(index, (book, description))| BookEntry {
                    position: index + 1,
                    id: book.id.clone(),
                    name: book.name.clone(),
                    description,
                    icon: book_icon(&book.id),
                    chapter_count: book.chapter_count(),
                })
                .collect::<Vec<_>>();

            if books.is_empty() {
                return None;
            }
            Some(BookSection {
                testament: *testament,
                title: strings.section_title(*testament),
                description: strings.section_description(*testament),
                books,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{search_books, BookEntry};
    use crate::corpus::loader::{load_from_sources, LanguageSource};
    use crate::corpus::store::CorpusStore;
    use crate::model::language::LanguageCode;

    fn store() -> CorpusStore {
        let old = r#"[
            {"id":"genesis","name":"Genesis","testament":"Old","chapters":[]},
            {"id":"exodus","name":"Exodus","testament":"Old","chapters":[]},
            {"id":"ruth","name":"Ruth","testament":"Old","chapters":[]}
        ]"#;
        let new = r#"[{"id":"john","name":"John","testament":"New","chapters":[]}]"#;
        load_from_sources(&[LanguageSource {
            language: LanguageCode::En,
            old_testament: old,
            new_testament: new,
        }])
        .expect("fixture loads")
    }

    #[test]
    fn empty_query_keeps_everything() {
        let sections = search_books(&store(), LanguageCode::En, "");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].books.len(), 3);
        assert_eq!(sections[0].title, "Old Testament");
    }

    #[test]
    fn description_matches_count() {
        // "covenant" only appears in the Exodus description.
        let sections = search_books(&store(), LanguageCode::En, "COVENANT");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].books[0].id, "exodus");
        assert_eq!(sections[0].books[0].position, 1);
    }

    #[test]
    fn query_is_matched_as_typed() {
        let found = search_books(&store(), LanguageCode::En, "ruth");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].books[0].id, "ruth");

        assert!(search_books(&store(), LanguageCode::En, "ruth ").is_empty());
        assert!(search_books(&store(), LanguageCode::En, " john").is_empty());
    }

    #[test]
    fn absent_language_yields_no_sections() {
        assert!(search_books(&store(), LanguageCode::Fr, "").is_empty());
    }

    #[test]
    fn label_uses_language_digits() {
        let entry = BookEntry {
            position: 12,
            id: "genesis".to_string(),
            name: "التكوين".to_string(),
            description: "",
            icon: "🌍",
            chapter_count: 50,
        };
        assert_eq!(entry.label(LanguageCode::Ar), "١٢. التكوين");
        assert_eq!(entry.chapters_label(LanguageCode::Ar), "٥٠ فصل");
        assert_eq!(entry.chapters_label(LanguageCode::En), "50 ch");
    }
}
