//! Flutter bridge for the scripture reader core.

pub mod api;
