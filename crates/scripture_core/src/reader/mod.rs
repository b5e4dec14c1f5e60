//! Reader-screen helpers.
//!
//! # Responsibility
//! - Guard chapter movement within a resolved book.
//! - Provide localized reader labels.
//!
//! # Invariants
//! - Rejected chapter moves never change the current chapter.

pub mod navigation;
pub mod strings;
