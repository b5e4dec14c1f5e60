//! Immutable corpus store and book lookup.
//!
//! # Responsibility
//! - Hold the per-language testament collections.
//! - Resolve book listings and single books for a language.
//!
//! # Invariants
//! - Collections keep canonical book order; lookups never re-sort.
//! - Absent languages resolve to empty listings and `None` books.
//! - Book ids match case-insensitively.

use crate::model::book::{Book, Testament};
use crate::model::language::LanguageCode;
use log::debug;
use std::collections::BTreeMap;

/// Old and new testament books of one language, in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestamentCollections {
    pub old_testament: Vec<Book>,
    pub new_testament: Vec<Book>,
}

impl TestamentCollections {
    pub fn books(&self, testament: Testament) -> &[Book] {
        match testament {
            Testament::Old => &self.old_testament,
            Testament::New => &self.new_testament,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Book> {
        self.old_testament.iter().chain(self.new_testament.iter())
    }
}

/// Process-wide, read-only multilingual corpus.
///
/// Built by [`crate::corpus::loader::load`]; there is no mutation API.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    languages: BTreeMap<LanguageCode, TestamentCollections>,
}

impl CorpusStore {
    pub(crate) fn from_collections(languages: BTreeMap<LanguageCode, TestamentCollections>) -> Self {
        Self { languages }
    }

    /// Languages with data in this store, in code order.
    pub fn languages(&self) -> Vec<LanguageCode> {
        self.languages.keys().copied().collect()
    }

    pub fn has_language(&self, language: LanguageCode) -> bool {
        self.languages.contains_key(&language)
    }

    /// Total books across all languages and testaments.
    pub fn book_count(&self) -> usize {
        self.languages
            .values()
            .map(|collections| collections.old_testament.len() + collections.new_testament.len())
            .sum()
    }

    /// Lists one testament's books for a language in canonical order.
    ///
    /// Returns an empty slice when the language has no data.
    pub fn books_by_language_and_testament(
        &self,
        language: LanguageCode,
        testament: Testament,
    ) -> &[Book] {
        match self.languages.get(&language) {
            Some(collections) => collections.books(testament),
            None => {
                debug!(
                    "event=books_list module=corpus status=no_language language={} testament={:?}",
                    language, testament
                );
                &[]
            }
        }
    }

    /// Finds a book by id in either testament of a language.
    ///
    /// `id` is matched ignoring ASCII case only. A miss is an ordinary
    /// outcome (stale deep link, missing translation).
    pub fn book_by_id(&self, language: LanguageCode, id: &str) -> Option<&Book> {
        let found = self
            .languages
            .get(&language)
            .and_then(|collections| {
                collections
                    .iter()
                    .find(|book| book.id.eq_ignore_ascii_case(id))
            });

        if found.is_none() {
            debug!(
                "event=book_lookup module=corpus status=not_found language={} id_len={}",
                language,
                id.len()
            );
        }
        found
    }
}
