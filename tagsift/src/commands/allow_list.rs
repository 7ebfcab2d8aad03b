//! `allow-list` command: prints the tag names a configuration keeps.

use anyhow::{Context, Result};
use std::io::{self, Write};

use tagsift_core::{AllowList, load_config_by_name};

use crate::cli::AllowListCommand;

pub fn run_allow_list(cmd: &AllowListCommand) -> Result<()> {
    let config = load_config_by_name(&cmd.config)
        .with_context(|| format!("Failed to load configuration '{}'", cmd.config))?;
    let allow_list = AllowList::from_config(&config)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "Emission form: {}", config.emission_form)?;
    for name in allow_list.sorted_names() {
        writeln!(writer, "{}", name)?;
    }
    Ok(())
}
