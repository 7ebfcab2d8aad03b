// tagsift/src/logger.rs
//! Logger initialization for the CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`, writing to stderr.
///
/// `RUST_LOG` is honoured unless `level` is given, in which case it overrides
/// the filter for every module. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}
