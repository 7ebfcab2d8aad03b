// tagsift-core/src/generator.rs
//! Re-emission of surviving tags as markup.
//!
//! Names are written verbatim, with no escaping and no separators between
//! consecutive tags.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::tokenizer::TagToken;

/// Template used to render each surviving tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionForm {
    /// `<name>`
    OpenOnly,
    /// `<name></name>`
    #[default]
    OpenClose,
}

impl fmt::Display for EmissionForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EmissionForm::OpenOnly => write!(f, "open_only"),
            EmissionForm::OpenClose => write!(f, "open_close"),
        }
    }
}

impl FromStr for EmissionForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "open_only" => Ok(EmissionForm::OpenOnly),
            "open_close" => Ok(EmissionForm::OpenClose),
            other => Err(format!("Unknown emission form: '{}'", other)),
        }
    }
}

/// Renders `tokens` in order using a single `form` for the whole output.
pub fn generate(tokens: &[TagToken], form: EmissionForm) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.name.len() * 2 + 5).sum());
    for token in tokens {
        out.push('<');
        out.push_str(&token.name);
        out.push('>');
        if form == EmissionForm::OpenClose {
            out.push_str("</");
            out.push_str(&token.name);
            out.push('>');
        }
    }
    out
}
