//! Corpus loader for bundled JSON datasets.
//!
//! # Responsibility
//! - Embed the per-language `old_testament` / `new_testament` documents.
//! - Parse and validate them into a [`CorpusStore`].
//!
//! # Invariants
//! - Every book sits in the collection matching its `testament` field.
//! - A book id appears at most once per language.
//! - A book id never sits in different testaments across languages.
//! - Loading is all-or-nothing; the first violation aborts it.

use crate::corpus::store::{CorpusStore, TestamentCollections};
use crate::model::book::{Book, ModelValidationError, Testament};
use crate::model::language::LanguageCode;
use log::{error, info};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type CorpusResult<T> = Result<T, CorpusLoadError>;

/// Raw JSON documents for one language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSource<'a> {
    pub language: LanguageCode,
    pub old_testament: &'a str,
    pub new_testament: &'a str,
}

const BUNDLED_SOURCES: &[LanguageSource<'static>] = &[
    LanguageSource {
        language: LanguageCode::Ar,
        old_testament: include_str!("../../data/ar/old_testament.json"),
        new_testament: include_str!("../../data/ar/new_testament.json"),
    },
    LanguageSource {
        language: LanguageCode::En,
        old_testament: include_str!("../../data/en/old_testament.json"),
        new_testament: include_str!("../../data/en/new_testament.json"),
    },
    LanguageSource {
        language: LanguageCode::Fr,
        old_testament: include_str!("../../data/fr/old_testament.json"),
        new_testament: include_str!("../../data/fr/new_testament.json"),
    },
];

/// Bundled dataset defect detected while building the store.
#[derive(Debug)]
pub enum CorpusLoadError {
    Parse {
        language: LanguageCode,
        testament: Testament,
        source: serde_json::Error,
    },
    InvalidBook {
        language: LanguageCode,
        testament: Testament,
        source: ModelValidationError,
    },
    TestamentMismatch {
        language: LanguageCode,
        book_id: String,
        expected: Testament,
        found: Testament,
    },
    DuplicateBookId {
        language: LanguageCode,
        book_id: String,
    },
    DuplicateLanguage(LanguageCode),
    TestamentConflict {
        book_id: String,
        language: LanguageCode,
        other_language: LanguageCode,
    },
}

impl Display for CorpusLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse {
                language,
                testament,
                source,
            } => write!(
                f,
                "failed to parse {language} {} data: {source}",
                testament.section_id()
            ),
            Self::InvalidBook {
                language,
                testament,
                source,
            } => write!(
                f,
                "invalid book in {language} {} data: {source}",
                testament.section_id()
            ),
            Self::TestamentMismatch {
                language,
                book_id,
                expected,
                found,
            } => write!(
                f,
                "{language} book `{book_id}` is listed under {expected:?} but declares {found:?}"
            ),
            Self::DuplicateBookId { language, book_id } => {
                write!(f, "{language} data lists book `{book_id}` more than once")
            }
            Self::DuplicateLanguage(language) => {
                write!(f, "language `{language}` is supplied more than once")
            }
            Self::TestamentConflict {
                book_id,
                language,
                other_language,
            } => write!(
                f,
                "book `{book_id}` sits in different testaments for `{language}` and `{other_language}`"
            ),
        }
    }
}

impl Error for CorpusLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::InvalidBook { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Builds the store from the datasets compiled into this crate.
///
/// # Errors
/// - Returns the first parse or invariant violation found. Bundled data is
///   a build artifact, so callers should treat this as a startup failure.
pub fn load() -> CorpusResult<CorpusStore> {
    load_from_sources(BUNDLED_SOURCES)
}

/// Builds the store from caller-supplied JSON documents.
pub fn load_from_sources(sources: &[LanguageSource<'_>]) -> CorpusResult<CorpusStore> {
    let started_at = Instant::now();
    info!(
        "event=corpus_load module=corpus status=start languages={}",
        sources.len()
    );

    match build_store(sources) {
        Ok(store) => {
            info!(
                "event=corpus_load module=corpus status=ok languages={} books={} duration_ms={}",
                store.languages().len(),
                store.book_count(),
                started_at.elapsed().as_millis()
            );
            Ok(store)
        }
        Err(err) => {
            error!(
                "event=corpus_load module=corpus status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn build_store(sources: &[LanguageSource<'_>]) -> CorpusResult<CorpusStore> {
    let mut languages = BTreeMap::new();

    for source in sources {
        if languages.contains_key(&source.language) {
            return Err(CorpusLoadError::DuplicateLanguage(source.language));
        }
        let collections = parse_language(source)?;
        languages.insert(source.language, collections);
    }

    check_testament_consistency(&languages)?;
    Ok(CorpusStore::from_collections(languages))
}

fn parse_language(source: &LanguageSource<'_>) -> CorpusResult<TestamentCollections> {
    let old_testament = parse_testament(source.language, Testament::Old, source.old_testament)?;
    let new_testament = parse_testament(source.language, Testament::New, source.new_testament)?;

    let mut seen = HashSet::new();
    for book in old_testament.iter().chain(new_testament.iter()) {
        if !seen.insert(book.id.as_str()) {
            return Err(CorpusLoadError::DuplicateBookId {
                language: source.language,
                book_id: book.id.clone(),
            });
        }
    }

    Ok(TestamentCollections {
        old_testament,
        new_testament,
    })
}

fn parse_testament(
    language: LanguageCode,
    testament: Testament,
    raw: &str,
) -> CorpusResult<Vec<Book>> {
    let books: Vec<Book> =
        serde_json::from_str(raw).map_err(|source| CorpusLoadError::Parse {
            language,
            testament,
            source,
        })?;

    for book in &books {
        if book.testament != testament {
            return Err(CorpusLoadError::TestamentMismatch {
                language,
                book_id: book.id.clone(),
                expected: testament,
                found: book.testament,
            });
        }
        book.validate()
            .map_err(|source| CorpusLoadError::InvalidBook {
                language,
                testament,
                source,
            })?;
    }

    Ok(books)
}

fn check_testament_consistency(
    languages: &BTreeMap<LanguageCode, TestamentCollections>,
) -> CorpusResult<()> {
    let mut placements: HashMap<&str, (Testament, LanguageCode)> = HashMap::new();

    for (language, collections) in languages {
        for book in collections
            .old_testament
            .iter()
            .chain(collections.new_testament.iter())
        {
            match placements.get(book.id.as_str()) {
                Some((testament, other_language)) if *testament != book.testament => {
                    return Err(CorpusLoadError::TestamentConflict {
                        book_id: book.id.clone(),
                        language: *language,
                        other_language: *other_language,
                    });
                }
                Some(_) => {}
                None => {
                    placements.insert(book.id.as_str(), (book.testament, *language));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load, load_from_sources, CorpusLoadError, LanguageSource};
    use crate::model::book::Testament;
    use crate::model::language::LanguageCode;

    const GENESIS_OLD: &str = r#"[{"id":"genesis","name":"Genesis","testament":"Old",
        "chapters":[{"number":1,"verses":[{"number":1,"text":"In the beginning"}]}]}]"#;

    #[test]
    fn bundled_data_loads_every_supported_language() {
        let store = load().expect("bundled corpus should load");
        for language in LanguageCode::ALL {
            assert!(store.has_language(language), "missing {language}");
        }
    }

    #[test]
    fn malformed_json_reports_language_and_testament() {
        let sources = [LanguageSource {
            language: LanguageCode::Fr,
            old_testament: GENESIS_OLD,
            new_testament: "[{\"id\":",
        }];
        let err = load_from_sources(&sources).unwrap_err();
        match err {
            CorpusLoadError::Parse {
                language,
                testament,
                ..
            } => {
                assert_eq!(language, LanguageCode::Fr);
                assert_eq!(testament, Testament::New);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn book_under_wrong_collection_is_rejected() {
        let sources = [LanguageSource {
            language: LanguageCode::En,
            old_testament: "[]",
            new_testament: GENESIS_OLD,
        }];
        let err = load_from_sources(&sources).unwrap_err();
        assert!(matches!(err, CorpusLoadError::TestamentMismatch { .. }));
    }

    #[test]
    fn duplicate_language_is_rejected() {
        let source = LanguageSource {
            language: LanguageCode::En,
            old_testament: GENESIS_OLD,
            new_testament: "[]",
        };
        let err = load_from_sources(&[source, source]).unwrap_err();
        assert!(matches!(
            err,
            CorpusLoadError::DuplicateLanguage(LanguageCode::En)
        ));
    }

    #[test]
    fn cross_language_testament_conflict_is_rejected() {
        let genesis_new = GENESIS_OLD.replace("\"Old\"", "\"New\"");
        let sources = [
            LanguageSource {
                language: LanguageCode::En,
                old_testament: GENESIS_OLD,
                new_testament: "[]",
            },
            LanguageSource {
                language: LanguageCode::Fr,
                old_testament: "[]",
                new_testament: genesis_new.as_str(),
            },
        ];
        let err = load_from_sources(&sources).unwrap_err();
        assert!(matches!(err, CorpusLoadError::TestamentConflict { .. }));
    }

    #[test]
    fn duplicate_verse_numbers_fail_load() {
        let raw = r#"[{"id":"ruth","name":"Ruth","testament":"Old",
            "chapters":[{"number":1,"verses":[{"number":1,"text":"a"},{"number":1,"text":"b"}]}]}]"#;
        let sources = [LanguageSource {
            language: LanguageCode::En,
            old_testament: raw,
            new_testament: "[]",
        }];
        let err = load_from_sources(&sources).unwrap_err();
        assert!(matches!(err, CorpusLoadError::InvalidBook { .. }));
        assert!(err.to_string().contains("repeats verse 1"));
    }
}
