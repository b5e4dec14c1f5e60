//! User preferences and the explicit application context.
//!
//! # Responsibility
//! - Persist the dark-mode flag in key-value storage.
//! - Carry theme and language as one explicitly passed context value.
//!
//! # Invariants
//! - Storage failures never reach the caller of [`context::AppContext`];
//!   they are logged and the in-memory value wins.
//! - Corpus lookups never read the context; callers pass the language in.

pub mod context;
pub mod store;
