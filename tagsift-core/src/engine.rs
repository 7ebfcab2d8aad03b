// tagsift-core/src/engine.rs
//! Defines the `SanitizationEngine` trait.
//!
//! The trait decouples callers such as the CLI from the concrete pipeline, so
//! alternative tokenizers or emitters can be slotted in behind the same API.
//!
//! License: MIT OR APACHE 2.0

use crate::config::AllowList;
use crate::generator::EmissionForm;
use crate::report::{SanitizationReport, TagSummaryItem};

/// Core contract of a markup sanitizer.
///
/// Every method is total: malformed markup degrades to fewer tokens, never to
/// an error.
pub trait SanitizationEngine: Send + Sync {
    /// Tokenizes `input`, keeps allow-listed tags, strips their attributes and
    /// re-emits them.
    fn sanitize(&self, input: &str) -> String;

    /// Same as [`SanitizationEngine::sanitize`], also reporting kept and dropped tag names.
    fn sanitize_with_report(&self, input: &str) -> SanitizationReport;

    /// Classifies every tag in `input` without producing output.
    ///
    /// Used by the `scan` command.
    fn analyze(&self, input: &str) -> Vec<TagSummaryItem>;

    fn allow_list(&self) -> &AllowList;

    fn emission_form(&self) -> EmissionForm;
}
