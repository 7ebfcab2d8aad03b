//! errors.rs - Custom error types for the tagsift-core library.
//!
//! The sanitization pipeline itself is total and never fails. These errors
//! cover the layers around it: loading and validating allow-list
//! configuration, and the optional input-size pre-check.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `tagsift-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TagsiftError {
    #[error("Invalid allow-list tag name '{0}': names must be non-empty, must not start with '/', and must contain no whitespace, '<' or '>'")]
    InvalidTagName(String),

    #[error("Duplicate allow-list tag name '{0}'")]
    DuplicateTagName(String),

    #[error("Allow-list is empty; at least one tag name is required")]
    EmptyAllowList,

    #[error("Input length ({0} bytes) exceeds maximum allowed ({1} bytes)")]
    InputTooLarge(usize, usize),
}
