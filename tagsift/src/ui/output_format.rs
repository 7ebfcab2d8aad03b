//! Formatting of status messages written to stderr.
//!
//! Messages are prefixed and, when the target supports it, coloured with
//! `owo-colors`. Plain text is written otherwise so that piped output stays
//! free of escape codes.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "[INFO]".cyan(), msg)
    } else {
        writeln!(writer, "[INFO] {}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "[WARN]".yellow(), msg)
    } else {
        writeln!(writer, "[WARN] {}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "[ERROR]".red().bold(), msg)
    } else {
        writeln!(writer, "[ERROR] {}", msg)
    }
}
