// tagsift/src/main.rs
//! TagSift entry point.
//!
//! Parses arguments, sets up logging and dispatches to the selected command.

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};

use tagsift::cli::{Cli, Commands};
use tagsift::commands::{allow_list::run_allow_list, error_msg, sanitize::run_sanitize, scan::run_scan};
use tagsift::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("tagsift started. Version: {}", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Commands::Sanitize(cmd) => run_sanitize(cmd, cli.quiet),
        Commands::Scan(cmd) => run_scan(cmd),
        Commands::AllowList(cmd) => run_allow_list(cmd),
    };

    if let Err(e) = result {
        error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
