//! `sanitize` command: runs the pipeline and prints input and output.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tagsift_core::{load_config_by_name, SanitizationEngine, Sanitizer, SanitizerConfig};

use crate::cli::SanitizeCommand;
use crate::commands::{info_msg, read_input, warn_msg};

/// Options for the `run_sanitize_opts` API.
pub struct SanitizeOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub max_input_bytes: usize,
    pub plain: bool,
    pub quiet: bool,
}

/// Entry point used by `main` for the `sanitize` subcommand.
pub fn run_sanitize(cmd: &SanitizeCommand, quiet: bool) -> Result<()> {
    let mut config: SanitizerConfig = load_config_by_name(&cmd.config)
        .with_context(|| format!("Failed to load configuration '{}'", cmd.config))?;
    if let Some(form) = cmd.form {
        debug!("Emission form overridden from the command line: {:?}", form);
        config.emission_form = form.into();
    }
    let sanitizer = Sanitizer::from_config(&config)?;

    let input = read_input(cmd.text.as_deref(), cmd.input_file.as_deref(), cmd.max_input_bytes)?;
    let opts = SanitizeOptions {
        input,
        output_path: cmd.output.clone(),
        max_input_bytes: cmd.max_input_bytes,
        plain: cmd.plain,
        quiet,
    };
    run_sanitize_opts(&sanitizer, opts, &mut io::stdout().lock())
}

/// Sanitizes `opts.input` and writes the result to `stdout` or the output file.
pub fn run_sanitize_opts<W: Write>(
    engine: &dyn SanitizationEngine,
    opts: SanitizeOptions,
    stdout: &mut W,
) -> Result<()> {
    info!("Starting sanitize operation.");
    tagsift_core::check_input_size(&opts.input, opts.max_input_bytes)?;

    let report = engine.sanitize_with_report(&opts.input);
    debug!(
        "Input sanitized. Original length: {}, sanitized length: {}, kept: {}, dropped: {}",
        opts.input.len(),
        report.output.len(),
        report.kept.len(),
        report.dropped.len()
    );

    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing sanitized content to file: {}", path.display()));
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", report.output)?;
    } else if opts.plain {
        writeln!(stdout, "{}", report.output)?;
    } else {
        writeln!(stdout, "Input: {}", opts.input.trim_end_matches(['\r', '\n']))?;
        writeln!(stdout, "Output: {}", report.output)?;
    }

    if !opts.quiet {
        if !report.dropped.is_empty() {
            info_msg(format!("Dropped {} unsafe tag(s).", report.dropped.len()));
        }
        if report.kept.is_empty() && !opts.input.is_empty() {
            warn_msg("No allow-listed tags found; output is empty.");
        }
    }
    info!("Sanitize operation completed.");
    Ok(())
}
