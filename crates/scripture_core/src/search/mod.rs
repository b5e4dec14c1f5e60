//! In-memory search over the loaded corpus.
//!
//! # Responsibility
//! - Interpret reader queries against one chapter's verses.
//! - Filter the book browser's testament sections.
//!
//! # Invariants
//! - Search is stateless and recomputed per query; nothing is cached.
//! - Malformed queries degrade to free-text matching instead of failing.

pub mod books;
pub mod verses;
