//! Configuration management for `tagsift-core`.
//!
//! This module defines the allow-list of safe tag names and the sanitizer
//! configuration that selects it. Configurations are plain YAML documents and
//! are validated before they can be frozen into an [`AllowList`]. Once built,
//! an allow-list cannot be mutated.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::TagsiftError;
use crate::generator::EmissionForm;

/// Tag names considered safe when no configuration is supplied.
pub const DEFAULT_ALLOWED_TAGS: [&str; 5] = ["a", "b", "i", "u", "p"];

/// Maximum input size accepted by [`crate::Sanitizer::sanitize_checked`].
pub const MAX_INPUT_LENGTH: usize = 1 << 20;

lazy_static! {
    static ref TAG_NAME_REGEX: Regex = Regex::new(r"^[^\s<>/][^\s<>]*$").unwrap();
}

/// Immutable set of tag names that survive sanitization.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: HashSet<String>,
}

impl AllowList {
    /// Builds an allow-list from the given names, rejecting invalid or duplicate entries.
    pub fn new<I, S>(names: I) -> Result<Self, TagsiftError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        for name in names {
            let name = name.into();
            if !TAG_NAME_REGEX.is_match(&name) {
                return Err(TagsiftError::InvalidTagName(name));
            }
            if set.contains(&name) {
                return Err(TagsiftError::DuplicateTagName(name));
            }
            set.insert(name);
        }
        if set.is_empty() {
            return Err(TagsiftError::EmptyAllowList);
        }
        Ok(Self { names: set })
    }

    pub fn from_config(config: &SanitizerConfig) -> Result<Self, TagsiftError> {
        Self::new(config.allowed_tags.iter().cloned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the names in sorted order, for stable display.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self {
            names: DEFAULT_ALLOWED_TAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Top-level sanitizer configuration as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Exact tag names to keep.
    pub allowed_tags: Vec<String>,
    /// Rendering used for every surviving tag.
    pub emission_form: EmissionForm,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|s| s.to_string()).collect(),
            emission_form: EmissionForm::default(),
        }
    }
}

impl SanitizerConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading allow-list configuration from: {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SanitizerConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        info!(
            "Loaded {} allowed tag(s) from file {}.",
            config.allowed_tags.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the built-in configuration embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default allow-list from embedded string...");
        let default_yaml = include_str!("../config/default_allow_list.yaml");
        let config: SanitizerConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default allow-list")?;

        debug!("Loaded {} default allowed tag(s).", config.allowed_tags.len());
        Ok(config)
    }

    /// Checks that every tag name is usable and the list is non-empty.
    pub fn validate(&self) -> Result<(), TagsiftError> {
        AllowList::from_config(self).map(|_| ())
    }
}

/// Directories searched, in order, for a named configuration.
pub fn config_candidate_paths(name: &str) -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".tagsift").join("allow_lists")),
        dirs::config_dir().map(|p| p.join("tagsift").join("allow_lists")),
        Some(PathBuf::from("./config")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(format!("{}.yaml", name)))
        .collect()
}

/// Loads a configuration from an explicit path, or by name from the candidate directories.
///
/// The name `default` always resolves to the embedded configuration.
pub fn load_config_by_name(name_or_path: &str) -> Result<SanitizerConfig> {
    debug!("Attempting to load configuration from: '{}'", name_or_path);
    if name_or_path == "default" {
        return SanitizerConfig::load_default();
    }

    let path = Path::new(name_or_path);
    if path.is_file() {
        return SanitizerConfig::load_from_file(path);
    }

    let candidates = config_candidate_paths(name_or_path);
    match candidates.iter().find(|p| p.is_file()) {
        Some(found) => SanitizerConfig::load_from_file(found),
        None => {
            warn!(
                "Configuration '{}' not found in {} candidate location(s).",
                name_or_path,
                candidates.len()
            );
            anyhow::bail!(
                "Configuration '{}' not found. It is not a valid file path, and was not found in expected locations.",
                name_or_path
            )
        }
    }
}
