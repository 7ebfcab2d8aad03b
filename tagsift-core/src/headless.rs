// tagsift-core/src/headless.rs
//! Convenience wrappers for one-shot, non-interactive sanitization.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::config::SanitizerConfig;
use crate::engine::SanitizationEngine;
use crate::sanitizer::Sanitizer;

/// Process-wide sanitizer over the built-in allow-list, frozen on first use.
static DEFAULT_SANITIZER: Lazy<Sanitizer> = Lazy::new(Sanitizer::default);

/// Sanitizes `input` with the default allow-list (`a`, `b`, `i`, `u`, `p`)
/// and the open+close emission form.
pub fn sanitize(input: &str) -> String {
    DEFAULT_SANITIZER.sanitize(input)
}

/// Builds a sanitizer from `config` and runs it once over `input`.
pub fn headless_sanitize_string(config: &SanitizerConfig, input: &str) -> Result<String> {
    let sanitizer =
        Sanitizer::from_config(config).context("Failed to build sanitizer from configuration")?;
    Ok(sanitizer.sanitize(input))
}
