//! Chapter-scoped verse search.
//!
//! # Responsibility
//! - Classify a reader query as verse number, verse range or free text.
//! - Return the matching verses of one chapter.
//!
//! # Invariants
//! - Precedence is number, then range, then free text.
//! - An inverted range (`7-3`) is not a range; it is searched as text.
//! - Range results are ordered by verse number; every other shape keeps
//!   chapter order.
//! - Only the empty query returns the whole chapter unfiltered.
//! - Input is matched as typed: no trimming and no digit folding.

use crate::model::book::{Chapter, Verse};
use once_cell::sync::Lazy;
use regex::Regex;

static VERSE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)$").expect("valid verse number regex"));
static VERSE_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").expect("valid verse range regex"));

/// Parsed reader query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseQuery {
    /// Empty input; show the chapter as is.
    All,
    /// Exact verse number.
    Number(u64),
    /// Inclusive verse range with `start <= end`.
    Range { start: u64, end: u64 },
    /// Case-insensitive substring, stored lowercased.
    Text(String),
}

impl VerseQuery {
    /// Classifies raw input.
    ///
    /// Only ASCII digits form the number and range shapes; anything else,
    /// including padded input and Eastern Arabic digits, is free text.
    /// Numbers too large for `u64` saturate, which keeps them above every
    /// real verse number.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::All;
        }

        if let Some(caps) = VERSE_NUMBER_RE.captures(raw) {
            return Self::Number(parse_saturating(&caps[1]));
        }
        if let Some(caps) = VERSE_RANGE_RE.captures(raw) {
            let start = parse_saturating(&caps[1]);
            let end = parse_saturating(&caps[2]);
            if start <= end {
                return Self::Range { start, end };
            }
        }

        Self::Text(raw.to_lowercase())
    }
}

/// Applies a parsed query to one chapter.
pub fn filter_verses<'a>(chapter: &'a Chapter, query: &VerseQuery) -> Vec<&'a Verse> {
    match query {
        VerseQuery::All => chapter.verses.iter().collect(),
        VerseQuery::Number(number) => chapter
            .verses
            .iter()
            .find(|verse| u64::from(verse.number) == *number)
            .into_iter()
            .collect(),
        VerseQuery::Range { start, end } => chapter
            .verses_by_number()
            .into_iter()
            .filter(|verse| (*start..=*end).contains(&u64::from(verse.number)))
            .collect(),
        VerseQuery::Text(needle) => chapter
            .verses
            .iter()
            .filter(|verse| verse.text.to_lowercase().contains(needle.as_str()))
            .collect(),
    }
}

/// Parses `raw` and filters `chapter` in one step.
pub fn search_verses<'a>(chapter: &'a Chapter, raw: &str) -> Vec<&'a Verse> {
    filter_verses(chapter, &VerseQuery::parse(raw))
}

fn parse_saturating(digits: &str) -> u64 {
    digits.parse::<u64>().unwrap_or(u64::MAX)
}
