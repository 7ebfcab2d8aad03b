//! `scan` command: classifies tags without producing sanitized output.

use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use tagsift_core::{Classification, SanitizationEngine, Sanitizer, load_config_by_name, summary_to_json};

use crate::cli::ScanCommand;
use crate::commands::read_input;
use crate::ui::tag_summary;

pub fn run_scan(cmd: &ScanCommand) -> Result<()> {
    let config = load_config_by_name(&cmd.config)
        .with_context(|| format!("Failed to load configuration '{}'", cmd.config))?;
    let sanitizer = Sanitizer::from_config(&config)?;
    let input = read_input(cmd.text.as_deref(), cmd.input_file.as_deref(), cmd.max_input_bytes)?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    run_scan_opts(&sanitizer, &input, cmd.json, cmd.fail_over_threshold, &mut stdout.lock(), supports_color)
}

/// Prints the tag summary and enforces `fail_over_threshold` on the unsafe tag count.
pub fn run_scan_opts<W: Write>(
    engine: &dyn SanitizationEngine,
    input: &str,
    json: bool,
    fail_over_threshold: Option<usize>,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    info!("Starting scan operation.");
    let summary = engine.analyze(input);

    if json {
        writeln!(writer, "{}", summary_to_json(&summary)?)?;
    } else {
        tag_summary::print_summary(&summary, writer, supports_color)?;
    }

    let unsafe_count: usize = summary
        .iter()
        .filter(|item| item.classification == Classification::Unsafe)
        .map(|item| item.occurrences)
        .sum();
    info!("Scan found {} unsafe tag(s).", unsafe_count);

    if let Some(threshold) = fail_over_threshold {
        if unsafe_count > threshold {
            bail!(
                "Found {} unsafe tag(s), exceeding the threshold of {}.",
                unsafe_count,
                threshold
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_scan() {
        let mut out = Vec::new();
        run_scan_opts(&Sanitizer::default(), "<b><img>", true, None, &mut out, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["tag_name"], "img");
        assert_eq!(value[1]["classification"], "unsafe");
    }

    #[test]
    fn test_threshold() {
        let mut out = Vec::new();
        let input = "<script></script><b>";
        assert!(run_scan_opts(&Sanitizer::default(), input, false, Some(2), &mut out, false).is_ok());
        assert!(run_scan_opts(&Sanitizer::default(), input, false, Some(1), &mut out, false).is_err());
    }
}
