use scripture_core::{load, search_verses, Chapter, LanguageCode};

fn english_genesis_one() -> Chapter {
    let store = load().unwrap();
    store
        .book_by_id(LanguageCode::En, "genesis")
        .and_then(|book| book.chapter(1))
        .cloned()
        .expect("bundled English Genesis 1")
}

fn numbers(hits: &[&scripture_core::Verse]) -> Vec<u32> {
    hits.iter().map(|verse| verse.number).collect()
}

#[test]
fn range_returns_full_verses_in_order() {
    let chapter = english_genesis_one();
    let hits = search_verses(&chapter, "2-3");
    assert_eq!(numbers(&hits), vec![2, 3]);
    assert!(hits[0].text.starts_with("Now the earth"));
    assert!(hits[1].text.starts_with("And God said"));
}

#[test]
fn free_text_finds_only_matching_verse() {
    let chapter = english_genesis_one();
    assert_eq!(numbers(&search_verses(&chapter, "light")), vec![3]);
}

#[test]
fn empty_query_returns_whole_chapter() {
    let chapter = english_genesis_one();
    assert_eq!(numbers(&search_verses(&chapter, "")), vec![1, 2, 3]);
}

#[test]
fn exact_number_returns_single_verse() {
    let chapter = english_genesis_one();
    assert_eq!(numbers(&search_verses(&chapter, "2")), vec![2]);
    assert!(search_verses(&chapter, "4").is_empty());
}

#[test]
fn arabic_chapter_uses_ascii_shapes_and_literal_text() {
    let store = load().unwrap();
    let chapter = store
        .book_by_id(LanguageCode::Ar, "john")
        .and_then(|book| book.chapter(1))
        .unwrap();
    assert_eq!(numbers(&search_verses(chapter, "2-4")), vec![2, 3, 4]);
    assert!(search_verses(chapter, "٢-٤").is_empty());
    assert_eq!(numbers(&search_verses(chapter, "النور")), vec![5]);
}

#[test]
fn padded_query_is_searched_literally() {
    let chapter = english_genesis_one();
    assert!(search_verses(&chapter, " 2").is_empty());
    assert!(search_verses(&chapter, "2-3 ").is_empty());
    assert_eq!(numbers(&search_verses(&chapter, "light,")), vec![3]);
    assert_eq!(numbers(&search_verses(&chapter, " light")), vec![3]);
}

#[test]
fn inverted_range_falls_back_to_text() {
    let chapter = english_genesis_one();
    assert!(search_verses(&chapter, "3-1").is_empty());
}
