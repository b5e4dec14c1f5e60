//! Core content layer for the multilingual scripture reader.
//! This crate owns the corpus model, lookups, search and preferences; UI
//! code reaches it through the FFI crate.

pub mod catalog;
pub mod corpus;
pub mod db;
pub mod logging;
pub mod model;
pub mod numerals;
pub mod prefs;
pub mod reader;
pub mod search;

pub use catalog::{book_description, book_icon, browser_strings, BrowserStrings};
pub use corpus::loader::{load, load_from_sources, CorpusLoadError, CorpusResult, LanguageSource};
pub use corpus::store::{CorpusStore, TestamentCollections};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Book, Chapter, ModelValidationError, Testament, Verse};
pub use model::language::{supported_languages, Language, LanguageCode};
pub use numerals::format_number;
pub use prefs::context::{AppContext, DARK_MODE_KEY};
pub use prefs::store::{
    MemoryPreferenceStore, PrefResult, PreferenceError, PreferenceStore, SqlitePreferenceStore,
};
pub use reader::navigation::{check_chapter_move, ChapterCursor, ChapterMove};
pub use reader::strings::{chapter_heading, reader_strings, ReaderStrings};
pub use search::books::{search_books, BookEntry, BookSection};
pub use search::verses::{filter_verses, search_verses, VerseQuery};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
