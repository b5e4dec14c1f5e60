use scripture_core::{load, LanguageCode, Testament};
use std::collections::HashSet;

#[test]
fn book_ids_are_stable_across_languages() {
    let store = load().unwrap();
    for first in LanguageCode::ALL {
        for second in LanguageCode::ALL {
            for testament in Testament::ALL {
                for book in store.books_by_language_and_testament(first, testament) {
                    let Some(other) = store.book_by_id(second, &book.id) else {
                        continue;
                    };
                    assert_eq!(other.id, book.id);
                    assert_eq!(other.testament, book.testament);
                }
            }
        }
    }
}

#[test]
fn testament_listings_are_disjoint() {
    let store = load().unwrap();
    for language in LanguageCode::ALL {
        let old: HashSet<_> = store
            .books_by_language_and_testament(language, Testament::Old)
            .iter()
            .map(|book| book.id.as_str())
            .collect();
        let new: HashSet<_> = store
            .books_by_language_and_testament(language, Testament::New)
            .iter()
            .map(|book| book.id.as_str())
            .collect();
        assert!(!old.is_empty() && !new.is_empty());
        assert!(old.is_disjoint(&new), "overlap for {language}");
    }
}

#[test]
fn listing_keeps_canonical_order() {
    let store = load().unwrap();
    let ids = store
        .books_by_language_and_testament(LanguageCode::En, Testament::Old)
        .iter()
        .map(|book| book.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["genesis", "exodus", "ruth", "psalms"]);
}

#[test]
fn book_lookup_ignores_id_case() {
    let store = load().unwrap();
    let upper = store.book_by_id(LanguageCode::En, "GENESIS").unwrap();
    let lower = store.book_by_id(LanguageCode::En, "genesis").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.name, "Genesis");
}

#[test]
fn same_id_resolves_to_localized_book() {
    let store = load().unwrap();
    let french = store.book_by_id(LanguageCode::Fr, "john").unwrap();
    let arabic = store.book_by_id(LanguageCode::Ar, "john").unwrap();
    assert_eq!(french.name, "Jean");
    assert_eq!(arabic.name, "يوحنا");
    assert_ne!(
        french.chapters[0].verses[0].text,
        arabic.chapters[0].verses[0].text
    );
}

#[test]
fn chapter_counts_may_differ_between_languages() {
    let store = load().unwrap();
    let english = store.book_by_id(LanguageCode::En, "genesis").unwrap();
    let arabic = store.book_by_id(LanguageCode::Ar, "genesis").unwrap();
    assert_eq!(english.chapter_count(), 2);
    assert_eq!(arabic.chapter_count(), 1);
}

#[test]
fn unknown_book_is_not_found() {
    let store = load().unwrap();
    assert!(store.book_by_id(LanguageCode::En, "tobit").is_none());
    assert!(store.book_by_id(LanguageCode::En, "").is_none());
}
