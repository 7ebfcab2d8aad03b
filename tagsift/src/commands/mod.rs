// tagsift/src/commands/mod.rs
//! Command implementations and the helpers they share.

pub mod allow_list;
pub mod sanitize;
pub mod scan;

use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tagsift_core::check_input_size;

use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Resolves command input: inline text first, then a file, then stdin.
///
/// At most `limit + 1` bytes are read from a file or stdin, so oversized input
/// is rejected without being buffered in full.
pub fn read_input(text: Option<&str>, input_file: Option<&Path>, limit: usize) -> Result<String> {
    if let Some(text) = text {
        debug!("Using inline input ({} bytes).", text.len());
        check_input_size(text, limit)?;
        return Ok(text.to_string());
    }
    if let Some(path) = input_file {
        info!("Reading input from file: {}", path.display());
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        return read_bounded(file, limit)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }
    info!("Reading input from stdin...");
    read_bounded(io::stdin().lock(), limit).context("Failed to read from stdin")
}

/// Reads UTF-8 text from `reader`, failing once more than `limit` bytes arrive.
pub fn read_bounded<R: Read>(reader: R, limit: usize) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buf)?;
    if buf.len() > limit {
        bail!("Input exceeds maximum allowed ({} bytes)", limit);
    }
    String::from_utf8(buf).context("Input is not valid UTF-8")
}
