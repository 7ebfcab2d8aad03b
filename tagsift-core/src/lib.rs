// tagsift-core/src/lib.rs
//! # TagSift Core Library
//!
//! `tagsift-core` provides a minimal, allow-list based markup sanitizer. Input
//! text is scanned for `<...>` tags; each tag name is classified as safe or
//! unsafe against a fixed allow-list; unsafe tags are dropped, attributes are
//! always discarded, and the surviving names are re-emitted in a canonical
//! form.
//!
//! The library is pure: it performs no I/O and keeps no state between calls.
//! Logging goes through the `log` facade and is left to the host application.
//!
//! ## Modules
//!
//! * `tokenizer`: Extracts [`TagToken`]s from raw markup.
//! * `classifier`: Decides [`Classification`] per tag name.
//! * `stripper`: Clears tag attributes.
//! * `generator`: Re-emits tags using an [`EmissionForm`].
//! * `sanitizer`: The [`Sanitizer`] orchestrator.
//! * `engine`: The [`SanitizationEngine`] trait.
//! * `config`: [`AllowList`] and YAML-backed [`SanitizerConfig`].
//! * `report`: Summaries of kept and dropped tags.
//! * `headless`: One-shot helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use tagsift_core::sanitize;
//!
//! let output = sanitize("<script>alert('XSS');</script><b>Bold</b>");
//! assert_eq!(output, "<b></b>");
//! ```
//!
//! Closing tags are tokenized with their leading slash (`/b`), which is never
//! on the allow-list, so only opening tags survive. Text between tags is not
//! carried over.
//!
//! ## Error Handling
//!
//! Sanitization itself cannot fail. Configuration loading returns
//! `anyhow::Result`, and validation problems surface as [`TagsiftError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod config;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod headless;
pub mod report;
pub mod sanitizer;
pub mod stripper;
pub mod tokenizer;

/// Re-exports the configuration types and loaders.
pub use config::{
    config_candidate_paths,
    load_config_by_name,
    AllowList,
    SanitizerConfig,
    DEFAULT_ALLOWED_TAGS,
    MAX_INPUT_LENGTH,
};

pub use errors::TagsiftError;

pub use engine::SanitizationEngine;

/// Re-exports the pipeline stages.
pub use classifier::{Classification, Classifier};
pub use generator::{generate, EmissionForm};
pub use stripper::strip_attributes;
pub use tokenizer::{parse, TagToken};

pub use sanitizer::{check_input_size, Sanitizer};

pub use report::{summary_to_json, SanitizationReport, TagSummaryItem};

/// Re-exports one-shot helpers.
pub use headless::{headless_sanitize_string, sanitize};
