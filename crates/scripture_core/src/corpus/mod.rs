//! Read-only multilingual corpus.
//!
//! # Responsibility
//! - Parse bundled per-language book data into the canonical model.
//! - Answer "which books exist" and "give me this book" queries.
//!
//! # Invariants
//! - The store is built once and never mutated afterwards.
//! - A missing language is a valid state and yields empty results.
//! - A malformed bundled dataset fails construction; it is never patched up.

pub mod loader;
pub mod store;
