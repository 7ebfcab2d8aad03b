// tagsift/src/lib.rs
//! # TagSift CLI
//!
//! Terminal front end for `tagsift-core`. It reads markup from an argument,
//! a file or stdin, runs the sanitizer and prints the result. Diagnostics go
//! to stderr; the core library itself never writes to a stream.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
