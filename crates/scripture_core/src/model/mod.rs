//! Domain model for the scripture corpus.
//!
//! # Responsibility
//! - Define the testament → book → chapter → verse shape shared by loader,
//!   lookup and search code.
//! - Define the closed set of supported languages.
//!
//! # Invariants
//! - Books are identified by a stable lowercase slug shared by all languages.
//! - Verse and chapter numbers are 1-based and unique within their parent.

pub mod book;
pub mod language;
