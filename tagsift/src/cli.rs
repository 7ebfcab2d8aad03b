//! This file defines the command-line interface (CLI) for the tagsift application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tagsift_core::EmissionForm;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "tagsift",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reduce markup to allow-listed tags",
    long_about = "TagSift scans markup for tags, keeps only those whose names are on an allow-list, discards every attribute, and re-emits the surviving tags in a canonical form. Text content is not carried over.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `tagsift` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes markup from an argument, a file or stdin.
    #[command(about = "Sanitizes markup from an argument, a file or stdin.")]
    Sanitize(SanitizeCommand),

    /// Lists every tag in the input with its classification, without sanitizing.
    #[command(about = "Lists every tag in the input with its classification, without sanitizing.")]
    Scan(ScanCommand),

    /// Prints the allow-list in effect.
    #[command(about = "Prints the allow-list in effect.")]
    AllowList(AllowListCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Markup to sanitize (reads the file or stdin if not provided).
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Path to an input file.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Allow-list configuration, by name or path.
    #[arg(long = "config", value_name = "NAME_OR_PATH", default_value = "default", env = "TAGSIFT_CONFIG", help = "Allow-list configuration name or YAML file path.")]
    pub config: String,

    /// Overrides the emission form from the configuration.
    #[arg(long = "form", value_name = "FORM", help = "Rendering for surviving tags (overrides the configuration).")]
    pub form: Option<FormChoice>,

    /// Reject inputs larger than this many bytes.
    #[arg(long = "max-input-bytes", value_name = "N", default_value_t = tagsift_core::MAX_INPUT_LENGTH, help = "Reject inputs larger than N bytes.")]
    pub max_input_bytes: usize,

    /// Print only the sanitized output.
    #[arg(long = "plain", help = "Print only the sanitized output, without the Input/Output labels.")]
    pub plain: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Markup to scan (reads the file or stdin if not provided).
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Path to an input file.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Allow-list configuration, by name or path.
    #[arg(long = "config", value_name = "NAME_OR_PATH", default_value = "default", env = "TAGSIFT_CONFIG", help = "Allow-list configuration name or YAML file path.")]
    pub config: String,

    /// Reject inputs larger than this many bytes.
    #[arg(long = "max-input-bytes", value_name = "N", default_value_t = tagsift_core::MAX_INPUT_LENGTH, help = "Reject inputs larger than N bytes.")]
    pub max_input_bytes: usize,

    /// Print the summary as JSON.
    #[arg(long = "json", help = "Print the tag summary as JSON.")]
    pub json: bool,

    /// Exit with a non-zero code if more than N unsafe tags are found.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the number of unsafe tags exceeds N.")]
    pub fail_over_threshold: Option<usize>,
}

/// Arguments for the `allow-list` command.
#[derive(Parser, Debug)]
pub struct AllowListCommand {
    /// Allow-list configuration, by name or path.
    #[arg(long = "config", value_name = "NAME_OR_PATH", default_value = "default", env = "TAGSIFT_CONFIG", help = "Allow-list configuration name or YAML file path.")]
    pub config: String,
}

/// Emission form selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum FormChoice {
    /// `<name>` for each surviving tag.
    OpenOnly,
    /// `<name></name>` for each surviving tag.
    OpenClose,
}

impl From<FormChoice> for EmissionForm {
    fn from(choice: FormChoice) -> Self {
        match choice {
            FormChoice::OpenOnly => EmissionForm::OpenOnly,
            FormChoice::OpenClose => EmissionForm::OpenClose,
        }
    }
}
