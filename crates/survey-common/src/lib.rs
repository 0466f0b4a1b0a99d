//! Shared utilities for the survey normalization crates.
//!
//! This crate provides the Polars helpers every other crate leans on when it
//! needs to read a column cell as text.

pub mod polars;

pub use self::polars::{any_to_string, format_numeric, text_column};
