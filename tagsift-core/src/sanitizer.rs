// tagsift-core/src/sanitizer.rs
//! The sanitization orchestrator.
//!
//! A call to [`Sanitizer::sanitize`] drives a small state machine
//! (`Ready → Tokenized → Filtered → Done`) to completion synchronously. The
//! only mutable state is the in-flight token sequence owned by the current
//! state; nothing survives between calls, so a single `Sanitizer` can be
//! shared across threads.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::classifier::Classifier;
use crate::config::{AllowList, SanitizerConfig};
use crate::engine::SanitizationEngine;
use crate::errors::TagsiftError;
use crate::generator::{generate, EmissionForm};
use crate::report::{log_tag_decision_debug, summarize, SanitizationReport, TagSummaryItem};
use crate::stripper::strip_attributes;
use crate::tokenizer::{parse, TagToken};

/// Rejects inputs longer than `limit` bytes.
///
/// The pipeline accepts any input; this is an opt-in guard for callers that
/// receive untrusted data.
pub fn check_input_size(input: &str, limit: usize) -> Result<(), TagsiftError> {
    if input.len() > limit {
        return Err(TagsiftError::InputTooLarge(input.len(), limit));
    }
    Ok(())
}

/// Per-call pipeline state.
#[derive(Debug)]
enum PipelineState<'a> {
    Ready(&'a str),
    Tokenized(Vec<TagToken>),
    Filtered {
        survivors: Vec<TagToken>,
        dropped: Vec<String>,
    },
    Done(SanitizationReport),
}

/// Tokenizer, classifier, attribute stripper and re-emitter wired together.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    classifier: Classifier,
    form: EmissionForm,
}

impl Sanitizer {
    pub fn new(allow_list: AllowList) -> Self {
        Self::with_form(Arc::new(allow_list), EmissionForm::default())
    }

    pub fn with_form(allow_list: Arc<AllowList>, form: EmissionForm) -> Self {
        Self {
            classifier: Classifier::new(allow_list),
            form,
        }
    }

    /// Builds a sanitizer from a validated configuration.
    pub fn from_config(config: &SanitizerConfig) -> Result<Self, TagsiftError> {
        let allow_list = AllowList::from_config(config)?;
        debug!(
            "Sanitizer built with {} allowed tag(s), emission form {}.",
            allow_list.len(),
            config.emission_form
        );
        Ok(Self::with_form(Arc::new(allow_list), config.emission_form))
    }

    /// Runs [`SanitizationEngine::sanitize`] after enforcing `limit` on the input size.
    pub fn sanitize_checked(&self, input: &str, limit: usize) -> Result<String, TagsiftError> {
        check_input_size(input, limit)?;
        Ok(self.sanitize(input))
    }

    fn advance<'a>(&self, state: PipelineState<'a>) -> PipelineState<'a> {
        match state {
            PipelineState::Ready(input) => PipelineState::Tokenized(parse(input)),
            PipelineState::Tokenized(tokens) => {
                let mut survivors = Vec::with_capacity(tokens.len());
                let mut dropped = Vec::new();
                for token in tokens {
                    let classification = self.classifier.classify(&token.name);
                    log_tag_decision_debug(module_path!(), &token.name, classification);
                    if classification.is_safe() {
                        survivors.push(strip_attributes(token));
                    } else {
                        dropped.push(token.name);
                    }
                }
                PipelineState::Filtered { survivors, dropped }
            }
            PipelineState::Filtered { survivors, dropped } => {
                let output = generate(&survivors, self.form);
                PipelineState::Done(SanitizationReport {
                    output,
                    kept: survivors.into_iter().map(|t| t.name).collect(),
                    dropped,
                })
            }
            done @ PipelineState::Done(_) => done,
        }
    }

    fn run(&self, input: &str) -> SanitizationReport {
        let mut state = PipelineState::Ready(input);
        loop {
            state = match self.advance(state) {
                PipelineState::Done(report) => {
                    debug!(
                        "Sanitization finished: {} tag(s) kept, {} dropped.",
                        report.kept.len(),
                        report.dropped.len()
                    );
                    return report;
                }
                next => next,
            };
        }
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(AllowList::default())
    }
}

impl SanitizationEngine for Sanitizer {
    fn sanitize(&self, input: &str) -> String {
        self.run(input).output
    }

    fn sanitize_with_report(&self, input: &str) -> SanitizationReport {
        self.run(input)
    }

    fn analyze(&self, input: &str) -> Vec<TagSummaryItem> {
        let tokens = parse(input);
        summarize(
            tokens
                .iter()
                .map(|t| (t.name.as_str(), self.classifier.classify(&t.name))),
        )
    }

    fn allow_list(&self) -> &AllowList {
        self.classifier.allow_list()
    }

    fn emission_form(&self) -> EmissionForm {
        self.form
    }
}
