//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `scripture_core` linkage and bundled corpus packaging.
//! - Keep output deterministic for quick local sanity checks.

use scripture_core::{load, LanguageCode, Testament};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("scripture_core ping={}", scripture_core::ping());
    println!("scripture_core version={}", scripture_core::core_version());

    let store = match load() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("corpus load failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    for language in LanguageCode::ALL {
        let old = store.books_by_language_and_testament(language, Testament::Old);
        let new = store.books_by_language_and_testament(language, Testament::New);
        println!(
            "corpus language={} old_books={} new_books={}",
            language,
            old.len(),
            new.len()
        );
    }
    ExitCode::SUCCESS
}
