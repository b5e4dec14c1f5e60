//! Book, chapter and verse records.
//!
//! # Responsibility
//! - Define the canonical corpus records and their bundled JSON shape.
//! - Validate numbering and slug invariants once, at load time.
//!
//! # Invariants
//! - `Book::id` is a lowercase slug (`[a-z0-9_]+`).
//! - Chapter numbers are positive and unique within a book.
//! - Verse numbers are positive and unique within a chapter.
//! - Input order is preserved; numeric order is derived on demand.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Top-level corpus partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    /// Stable section identifier used by the book browser.
    pub fn section_id(self) -> &'static str {
        match self {
            Self::Old => "old_testament",
            Self::New => "new_testament",
        }
    }

    /// Parses `Old`/`New` ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub verses: Vec<Verse>,
}

impl Chapter {
    /// Returns verses sorted by verse number.
    ///
    /// Bundled data is not required to list verses in numeric order.
    pub fn verses_by_number(&self) -> Vec<&Verse> {
        let mut verses = self.verses.iter().collect::<Vec<_>>();
        verses.sort_by_key(|verse| verse.number);
        verses
    }

    /// Returns the verse with the given number.
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|verse| verse.number == number)
    }
}

/// One book of one language's corpus.
///
/// `id` joins the same logical book across languages; `name` and chapter text
/// are language-specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub testament: Testament,
    pub chapters: Vec<Chapter>,
}

impl Book {
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Returns the chapter with the given number.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters
            .iter()
            .find(|chapter| chapter.number == number)
    }

    /// Chapter numbers in book order, as offered by the chapter picker.
    pub fn chapter_numbers(&self) -> Vec<u32> {
        self.chapters.iter().map(|chapter| chapter.number).collect()
    }

    /// Validates slug and numbering invariants.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if !is_valid_slug(&self.id) {
            return Err(ModelValidationError::InvalidBookId(self.id.clone()));
        }

        let mut chapter_numbers = HashSet::new();
        for chapter in &self.chapters {
            if chapter.number == 0 {
                return Err(ModelValidationError::ZeroChapterNumber {
                    book_id: self.id.clone(),
                });
            }
            if !chapter_numbers.insert(chapter.number) {
                return Err(ModelValidationError::DuplicateChapter {
                    book_id: self.id.clone(),
                    chapter: chapter.number,
                });
            }

            let mut verse_numbers = HashSet::new();
            for verse in &chapter.verses {
                if verse.number == 0 {
                    return Err(ModelValidationError::ZeroVerseNumber {
                        book_id: self.id.clone(),
                        chapter: chapter.number,
                    });
                }
                if !verse_numbers.insert(verse.number) {
                    return Err(ModelValidationError::DuplicateVerse {
                        book_id: self.id.clone(),
                        chapter: chapter.number,
                        verse: verse.number,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Corpus record invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    InvalidBookId(String),
    ZeroChapterNumber {
        book_id: String,
    },
    DuplicateChapter {
        book_id: String,
        chapter: u32,
    },
    ZeroVerseNumber {
        book_id: String,
        chapter: u32,
    },
    DuplicateVerse {
        book_id: String,
        chapter: u32,
        verse: u32,
    },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBookId(id) => {
                write!(f, "book id `{id}` must be a non-empty lowercase slug")
            }
            Self::ZeroChapterNumber { book_id } => {
                write!(f, "book `{book_id}` has a chapter numbered 0")
            }
            Self::DuplicateChapter { book_id, chapter } => {
                write!(f, "book `{book_id}` repeats chapter {chapter}")
            }
            Self::ZeroVerseNumber { book_id, chapter } => {
                write!(f, "book `{book_id}` chapter {chapter} has a verse numbered 0")
            }
            Self::DuplicateVerse {
                book_id,
                chapter,
                verse,
            } => write!(
                f,
                "book `{book_id}` chapter {chapter} repeats verse {verse}"
            ),
        }
    }
}

impl Error for ModelValidationError {}

fn is_valid_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}
