//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose corpus lookup, search and preference calls to Dart via FRB.
//! - Translate core types into flat, string-friendly envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Unknown language codes behave like a language with no data.
//! - The corpus is loaded at most once per process.

use scripture_core::db::open_db;
use scripture_core::{
    browser_strings, check_chapter_move, core_version as core_version_inner,
    format_number as format_number_inner, init_logging as init_logging_inner, load,
    ping as ping_inner, reader_strings, search_books as search_books_inner,
    search_verses as search_verses_inner, supported_languages, AppContext, Book, ChapterMove,
    CorpusStore, LanguageCode, SqlitePreferenceStore, Testament,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const PREFS_DB_FILE_NAME: &str = "scripture_prefs.sqlite3";
static PREFS_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static CORPUS: OnceLock<Result<CorpusStore, String>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Loads the bundled corpus.
///
/// Call once during app startup; a non-empty result is a packaging defect
/// and the app should stop with that message.
///
/// # FFI contract
/// - Idempotent; later calls return the first outcome.
/// - Returns empty string on success and the load diagnostic on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_corpus() -> String {
    match corpus() {
        Ok(_) => String::new(),
        Err(message) => message,
    }
}

/// Language picker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageItem {
    pub code: String,
    pub name: String,
    pub is_rtl: bool,
}

/// Book list row for one testament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListItem {
    pub id: String,
    pub name: String,
    pub chapter_count: u32,
    pub icon: String,
}

/// Resolved book for the reader screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookView {
    pub id: String,
    pub name: String,
    /// `Old` or `New`.
    pub testament: String,
    pub chapter_numbers: Vec<u32>,
    pub chapter_labels: Vec<String>,
}

/// Book lookup envelope; `book` is `None` when not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookResponse {
    pub book: Option<BookView>,
    /// Localized "book not found" text when `book` is `None`.
    pub message: String,
}

/// Chapter move envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterMoveResponse {
    pub accepted: bool,
    /// Chapter to display after the request; unchanged when rejected.
    pub current: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Verse row for the reader screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseItem {
    pub number: u32,
    /// Number rendered in the language's digits.
    pub number_label: String,
    pub text: String,
}

/// Verse search envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseSearchResponse {
    pub items: Vec<VerseItem>,
    /// Localized "no verses" text when `items` is empty.
    pub message: String,
}

/// Book browser row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookBrowserItem {
    pub id: String,
    /// Numbered title, renumbered after filtering.
    pub label: String,
    pub description: String,
    pub icon: String,
    pub chapters_label: String,
}

/// Book browser section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookBrowserSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub books: Vec<BookBrowserItem>,
}

/// Theme and language snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContextView {
    pub dark_mode: bool,
    pub language: String,
}

/// Lists supported languages in picker order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_languages() -> Vec<LanguageItem> {
    supported_languages()
        .into_iter()
        .map(|language| LanguageItem {
            code: language.code.as_str().to_string(),
            name: language.name.to_string(),
            is_rtl: language.code.is_rtl(),
        })
        .collect()
}

/// Lists one testament's books in canonical order.
///
/// # FFI contract
/// - Unknown language or testament yields an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn list_books(language: String, testament: String) -> Vec<BookListItem> {
    let (Some(language), Some(testament)) =
        (LanguageCode::parse(&language), Testament::parse(&testament))
    else {
        return Vec::new();
    };
    let Ok(store) = corpus() else {
        return Vec::new();
    };

    store
        .books_by_language_and_testament(language, testament)
        .iter()
        .map(|book| BookListItem {
            id: book.id.clone(),
            name: book.name.clone(),
            chapter_count: book.chapter_count() as u32,
            icon: scripture_core::book_icon(&book.id).to_string(),
        })
        .collect()
}

/// Resolves a book by id (case-insensitive).
#[flutter_rust_bridge::frb(sync)]
pub fn get_book(language: String, book_id: String) -> BookResponse {
    let display_language = display_language(&language);
    match resolve_book(&language, &book_id) {
        Some(book) => BookResponse {
            book: Some(to_book_view(book, display_language)),
            message: String::new(),
        },
        None => BookResponse {
            book: None,
            message: reader_strings(display_language).book_not_found.to_string(),
        },
    }
}

/// Requests a move from chapter `current` to `target`.
///
/// # FFI contract
/// - Out-of-range targets are rejected and `current` is echoed back.
/// - An unresolvable book rejects every move.
#[flutter_rust_bridge::frb(sync)]
pub fn move_chapter(
    language: String,
    book_id: String,
    current: u32,
    target: i64,
) -> ChapterMoveResponse {
    let Some(book) = resolve_book(&language, &book_id) else {
        return ChapterMoveResponse {
            accepted: false,
            current,
            has_previous: false,
            has_next: false,
        };
    };

    let (accepted, current) = match check_chapter_move(book, target) {
        ChapterMove::Accepted(number) => (true, number),
        ChapterMove::Rejected => (false, current),
    };
    ChapterMoveResponse {
        accepted,
        current,
        has_previous: check_chapter_move(book, i64::from(current) - 1).is_accepted(),
        has_next: check_chapter_move(book, i64::from(current) + 1).is_accepted(),
    }
}

/// Searches one chapter by verse number, verse range or text.
#[flutter_rust_bridge::frb(sync)]
pub fn search_verses(
    language: String,
    book_id: String,
    chapter: u32,
    query: String,
) -> VerseSearchResponse {
    let display_language = display_language(&language);
    let items = resolve_book(&language, &book_id)
        .and_then(|book| book.chapter(chapter))
        .map(|chapter| {
            search_verses_inner(chapter, &query)
                .into_iter()
                .map(|verse| VerseItem {
                    number: verse.number,
                    number_label: format_number_inner(u64::from(verse.number), display_language),
                    text: verse.text.clone(),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let message = if items.is_empty() {
        reader_strings(display_language).no_results.to_string()
    } else {
        String::new()
    };
    VerseSearchResponse { items, message }
}

/// Filters the book browser sections.
#[flutter_rust_bridge::frb(sync)]
pub fn search_books(language: String, query: String) -> Vec<BookBrowserSection> {
    let Some(language) = LanguageCode::parse(&language) else {
        return Vec::new();
    };
    let Ok(store) = corpus() else {
        return Vec::new();
    };

    search_books_inner(store, language, &query)
        .into_iter()
        .map(|section| BookBrowserSection {
            id: section.testament.section_id().to_string(),
            title: section.title.to_string(),
            description: section.description.to_string(),
            books: section
                .books
                .iter()
                .map(|entry| BookBrowserItem {
                    id: entry.id.clone(),
                    label: entry.label(language),
                    description: entry.description.to_string(),
                    icon: entry.icon.to_string(),
                    chapters_label: entry.chapters_label(language),
                })
                .collect(),
        })
        .collect()
}

/// Localized "nothing found" labels for the book browser.
#[flutter_rust_bridge::frb(sync)]
pub fn book_browser_empty_labels(language: String) -> Vec<String> {
    let strings = browser_strings(display_language(&language));
    vec![strings.no_results.to_string(), strings.try_different.to_string()]
}

/// Formats a number in the digits of `language`.
#[flutter_rust_bridge::frb(sync)]
pub fn format_number(language: String, value: u64) -> String {
    format_number_inner(value, display_language(&language))
}

/// Loads theme preference and default language.
///
/// # FFI contract
/// - Storage failures fall back to defaults; never errors.
#[flutter_rust_bridge::frb(sync)]
pub fn load_app_context() -> AppContextView {
    let context = match open_db(resolve_prefs_db_path()) {
        Ok(conn) => AppContext::load(&SqlitePreferenceStore::new(&conn)),
        Err(err) => {
            log::warn!("event=prefs_open module=ffi status=error error={err}");
            AppContext::default()
        }
    };
    to_context_view(context)
}

/// Persists the dark-mode flag and returns the resulting context.
///
/// # FFI contract
/// - Returns the requested flag even when storage is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn set_dark_mode(dark_mode: bool) -> AppContextView {
    let context = match open_db(resolve_prefs_db_path()) {
        Ok(conn) => {
            let store = SqlitePreferenceStore::new(&conn);
            let mut context = AppContext::load(&store);
            context.set_dark_mode(&store, dark_mode);
            context
        }
        Err(err) => {
            log::warn!("event=prefs_open module=ffi status=error error={err}");
            AppContext {
                dark_mode,
                ..AppContext::default()
            }
        }
    };
    to_context_view(context)
}

fn corpus() -> Result<&'static CorpusStore, String> {
    CORPUS
        .get_or_init(|| load().map_err(|err| format!("corpus load failed: {err}")))
        .as_ref()
        .map_err(|err| err.clone())
}

fn resolve_book(language: &str, book_id: &str) -> Option<&'static Book> {
    let language = LanguageCode::parse(language)?;
    corpus().ok()?.book_by_id(language, book_id)
}

/// Language used for labels; unknown codes read as English.
fn display_language(language: &str) -> LanguageCode {
    LanguageCode::parse(language).unwrap_or(LanguageCode::En)
}

fn to_book_view(book: &Book, language: LanguageCode) -> BookView {
    BookView {
        id: book.id.clone(),
        name: book.name.clone(),
        testament: format!("{:?}", book.testament),
        chapter_numbers: book.chapter_numbers(),
        chapter_labels: book
            .chapter_numbers()
            .into_iter()
            .map(|number| format_number_inner(u64::from(number), language))
            .collect(),
    }
}

fn to_context_view(context: AppContext) -> AppContextView {
    AppContextView {
        dark_mode: context.dark_mode,
        language: context.language.as_str().to_string(),
    }
}

fn resolve_prefs_db_path() -> PathBuf {
    PREFS_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("SCRIPTURE_PREFS_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(PREFS_DB_FILE_NAME)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, format_number, get_book, init_corpus, init_logging, list_books,
        list_languages, move_chapter, ping, search_books, search_verses,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn bundled_corpus_initializes() {
        assert_eq!(init_corpus(), "");
        assert_eq!(list_languages().len(), 3);
    }

    #[test]
    fn unknown_language_lists_nothing() {
        assert!(list_books("de".to_string(), "Old".to_string()).is_empty());
        assert!(search_books("de".to_string(), String::new()).is_empty());
        assert!(!list_books("en".to_string(), "old".to_string()).is_empty());
    }

    #[test]
    fn missing_book_reports_localized_message() {
        let response = get_book("ar".to_string(), "tobit".to_string());
        assert!(response.book.is_none());
        assert_eq!(response.message, "الكتاب غير موجود");

        let found = get_book("en".to_string(), "Genesis".to_string());
        let book = found.book.expect("genesis exists");
        assert_eq!(book.chapter_numbers, vec![1, 2]);
        assert_eq!(book.testament, "Old");
    }

    #[test]
    fn rejected_move_echoes_current_chapter() {
        let response = move_chapter("en".to_string(), "genesis".to_string(), 2, 3);
        assert!(!response.accepted);
        assert_eq!(response.current, 2);
        assert!(response.has_previous);
        assert!(!response.has_next);

        let back = move_chapter("en".to_string(), "genesis".to_string(), 2, 1);
        assert!(back.accepted);
        assert_eq!(back.current, 1);
    }

    #[test]
    fn verse_search_labels_numbers_per_language() {
        let response = search_verses("ar".to_string(), "john".to_string(), 1, "4-5".to_string());
        let labels = response
            .items
            .iter()
            .map(|item| item.number_label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["٤", "٥"]);
        assert!(response.message.is_empty());

        let empty = search_verses("en".to_string(), "john".to_string(), 1, "zzz".to_string());
        assert!(empty.items.is_empty());
        assert_eq!(empty.message, "No verses found matching");
    }

    #[test]
    fn book_browser_renumbers_filtered_rows() {
        let sections = search_books("en".to_string(), "John".to_string());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "new_testament");
        assert_eq!(sections[0].books[0].label, "1. John");
    }

    #[test]
    fn format_number_uses_arabic_digits() {
        assert_eq!(format_number("ar".to_string(), 123), "١٢٣");
        assert_eq!(format_number("fr".to_string(), 123), "123");
    }
}
