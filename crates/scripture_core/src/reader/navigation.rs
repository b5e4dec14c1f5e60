//! Bounds-checked chapter navigation.
//!
//! # Responsibility
//! - Track the current chapter number of one book.
//! - Accept moves only inside `1..=chapter_count`.
//!
//! # Invariants
//! - `current` starts at 1 and only changes through an accepted move.
//! - Out-of-range moves are reported as `Rejected`, never as errors.

use crate::model::book::{Book, Chapter};
use log::debug;

/// Outcome of a chapter move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterMove {
    /// The cursor now points at the contained chapter number.
    Accepted(u32),
    /// The target was out of range; the cursor did not move.
    Rejected,
}

impl ChapterMove {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Checks a move without any cursor state.
///
/// Accepted iff `1 <= target <= book.chapter_count()`.
pub fn check_chapter_move(book: &Book, target: i64) -> ChapterMove {
    let count = book.chapter_count() as i64;
    if (1..=count).contains(&target) {
        ChapterMove::Accepted(target as u32)
    } else {
        ChapterMove::Rejected
    }
}

/// Current-chapter cursor over one resolved book.
#[derive(Debug, Clone, Copy)]
pub struct ChapterCursor<'a> {
    book: &'a Book,
    current: u32,
}

impl<'a> ChapterCursor<'a> {
    /// Opens the book at chapter 1.
    pub fn new(book: &'a Book) -> Self {
        Self { book, current: 1 }
    }

    pub fn book(&self) -> &'a Book {
        self.book
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Chapter record for the current number, if the book has one.
    pub fn current_chapter(&self) -> Option<&'a Chapter> {
        self.book.chapter(self.current)
    }

    /// Moves to `target` when in range; otherwise leaves the cursor alone.
    pub fn go_to_chapter(&mut self, target: i64) -> ChapterMove {
        let outcome = check_chapter_move(self.book, target);
        match outcome {
            ChapterMove::Accepted(number) => self.current = number,
            ChapterMove::Rejected => debug!(
                "event=chapter_move module=reader status=rejected book={} target={} count={}",
                self.book.id,
                target,
                self.book.chapter_count()
            ),
        }
        outcome
    }

    pub fn next(&mut self) -> ChapterMove {
        self.go_to_chapter(i64::from(self.current) + 1)
    }

    pub fn previous(&mut self) -> ChapterMove {
        self.go_to_chapter(i64::from(self.current) - 1)
    }

    pub fn has_next(&self) -> bool {
        check_chapter_move(self.book, i64::from(self.current) + 1).is_accepted()
    }

    pub fn has_previous(&self) -> bool {
        check_chapter_move(self.book, i64::from(self.current) - 1).is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::{check_chapter_move, ChapterCursor, ChapterMove};
    use crate::model::book::{Book, Chapter, Testament};

    fn book_with_chapters(count: u32) -> Book {
        Book {
            id: "genesis".to_string(),
            name: "Genesis".to_string(),
            testament: Testament::Old,
            chapters: (1..=count)
                .map(|number| Chapter {
                    number,
                    verses: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn move_is_accepted_only_inside_bounds() {
        let book = book_with_chapters(3);
        for target in [-1, 0, 4, 100] {
            assert_eq!(check_chapter_move(&book, target), ChapterMove::Rejected);
        }
        for target in 1..=3 {
            assert_eq!(
                check_chapter_move(&book, target),
                ChapterMove::Accepted(target as u32)
            );
        }
    }

    #[test]
    fn rejected_move_keeps_current_chapter() {
        let book = book_with_chapters(2);
        let mut cursor = ChapterCursor::new(&book);
        assert_eq!(cursor.go_to_chapter(2), ChapterMove::Accepted(2));
        assert_eq!(cursor.go_to_chapter(5), ChapterMove::Rejected);
        assert_eq!(cursor.current(), 2);
    }

    #[test]
    fn previous_and_next_are_noops_at_boundaries() {
        let book = book_with_chapters(2);
        let mut cursor = ChapterCursor::new(&book);
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous(), ChapterMove::Rejected);
        assert_eq!(cursor.current(), 1);

        assert_eq!(cursor.next(), ChapterMove::Accepted(2));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), ChapterMove::Rejected);
        assert_eq!(cursor.current(), 2);
        assert_eq!(cursor.current_chapter().map(|c| c.number), Some(2));
    }

    #[test]
    fn empty_book_rejects_every_move() {
        let book = book_with_chapters(0);
        let mut cursor = ChapterCursor::new(&book);
        assert_eq!(cursor.go_to_chapter(1), ChapterMove::Rejected);
        assert!(cursor.current_chapter().is_none());
    }
}
