//! Domain rules for the planboard hierarchy.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the
//! hierarchy kinds and which moves between them are legal, upload filename
//! rules, property validation, and decoding helpers for browser payloads.

pub mod error;
pub mod hierarchy;
pub mod lenient;
pub mod property;
pub mod types;
pub mod upload;
