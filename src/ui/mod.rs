//! Terminal-facing helpers for the binary

pub mod context;
pub mod error;
pub mod json;
pub mod terminal;
