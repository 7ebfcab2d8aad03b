// tagsift-core/src/classifier.rs
//! Safe/unsafe classification of tag names against an [`AllowList`].
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::config::AllowList;

/// Outcome of checking a tag name against the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Safe,
    Unsafe,
}

impl Classification {
    pub fn is_safe(self) -> bool {
        matches!(self, Classification::Safe)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Classification::Safe => write!(f, "safe"),
            Classification::Unsafe => write!(f, "unsafe"),
        }
    }
}

/// Decides per tag name whether it is retained.
///
/// Holds the allow-list behind an `Arc` so one frozen list can back any
/// number of classifiers across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    allow_list: Arc<AllowList>,
}

impl Classifier {
    pub fn new(allow_list: Arc<AllowList>) -> Self {
        Self { allow_list }
    }

    /// Case-sensitive exact membership test.
    pub fn is_safe(&self, name: &str) -> bool {
        self.allow_list.contains(name)
    }

    pub fn classify(&self, name: &str) -> Classification {
        if self.is_safe(name) {
            Classification::Safe
        } else {
            Classification::Unsafe
        }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(AllowList::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_safe_tags() {
        let classifier = Classifier::default();
        for name in ["a", "b", "i", "u", "p"] {
            assert_eq!(classifier.classify(name), Classification::Safe, "{} should be safe", name);
        }
    }

    #[test]
    fn test_unsafe_tags() {
        let classifier = Classifier::default();
        for name in ["script", "img", "div", "/b", "B", "", "b "] {
            assert!(!classifier.is_safe(name), "{:?} should be unsafe", name);
        }
    }

    #[test]
    fn test_custom_allow_list() {
        let list = AllowList::new(["em", "strong"]).unwrap();
        let classifier = Classifier::new(Arc::new(list));
        assert!(classifier.is_safe("em"));
        assert!(!classifier.is_safe("b"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Classification::Safe.to_string(), "safe");
        assert_eq!(Classification::Unsafe.to_string(), "unsafe");
    }
}
