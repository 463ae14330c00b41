//! Deterministic JSON serialization for the storage file and CLI output.
//!
//! Output is stable across runs:
//! - Object keys sorted (via `BTreeMap` in stored types)
//! - 2-space indentation
//! - Trailing newline

mod json;

pub use json::*;
