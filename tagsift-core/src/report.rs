// tagsift-core/src/report.rs
//! Reporting types for sanitization runs, plus content-safe debug logging.
//!
//! Tag names and attributes come straight from untrusted input, so debug logs
//! mask them unless `TAGSIFT_ALLOW_DEBUG_CONTENT=true` is set.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::Classification;

lazy_static! {
    /// Initialized once; controls whether raw tag content may appear in debug logs.
    static ref CONTENT_DEBUG_ALLOWED: bool = {
        std::env::var("TAGSIFT_ALLOW_DEBUG_CONTENT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Per-name summary of the tags seen in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSummaryItem {
    pub tag_name: String,
    pub classification: Classification,
    pub occurrences: usize,
}

/// Output of one sanitization together with what was kept and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SanitizationReport {
    pub output: String,
    /// Surviving tag names in output order.
    pub kept: Vec<String>,
    /// Discarded tag names in input order.
    pub dropped: Vec<String>,
}

/// Folds a classified name sequence into per-name counts, in first-appearance order.
pub fn summarize<'a, I>(classified: I) -> Vec<TagSummaryItem>
where
    I: IntoIterator<Item = (&'a str, Classification)>,
{
    let mut summary: Vec<TagSummaryItem> = Vec::new();
    for (name, classification) in classified {
        match summary.iter_mut().find(|item| item.tag_name == name) {
            Some(item) => item.occurrences += 1,
            None => summary.push(TagSummaryItem {
                tag_name: name.to_string(),
                classification,
                occurrences: 1,
            }),
        }
    }
    summary
}

pub fn summary_to_json(summary: &[TagSummaryItem]) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize tag summary")
}

pub fn mask_content(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[MASKED]".to_string()
    } else {
        format!("[MASKED: {} chars]", chars)
    }
}

fn get_loggable_content(content: &str) -> String {
    if *CONTENT_DEBUG_ALLOWED {
        content.to_string()
    } else {
        mask_content(content)
    }
}

pub fn log_tag_decision_debug(module_path: &str, name: &str, classification: Classification) {
    debug!(
        "{} Tag '{}' classified as {}",
        module_path,
        get_loggable_content(name),
        classification
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_content_short_string() {
        assert_eq!(mask_content("script"), "[MASKED]");
    }

    #[test]
    fn test_mask_content_long_string() {
        assert_eq!(mask_content("onclick=alert"), "[MASKED: 13 chars]");
    }

    #[test]
    fn test_mask_content_counts_chars_not_bytes() {
        assert_eq!(mask_content("ünïcödé"), "[MASKED]");
        assert_eq!(mask_content("ëëëëëëëëë"), "[MASKED: 9 chars]");
    }

    #[test]
    fn test_summarize_counts_in_first_appearance_order() {
        let summary = summarize(vec![
            ("script", Classification::Unsafe),
            ("b", Classification::Safe),
            ("script", Classification::Unsafe),
            ("b", Classification::Safe),
            ("b", Classification::Safe),
        ]);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].tag_name, "script");
        assert_eq!(summary[0].occurrences, 2);
        assert_eq!(summary[1].tag_name, "b");
        assert_eq!(summary[1].occurrences, 3);
        assert_eq!(summary[1].classification, Classification::Safe);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = summarize(vec![("p", Classification::Safe)]);
        let json = summary_to_json(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["tag_name"], "p");
        assert_eq!(value[0]["classification"], "safe");
        assert_eq!(value[0]["occurrences"], 1);
    }
}
