//! `aidict pairs`: list supported language pairs.

use std::path::Path;

use anyhow::Result;

use super::common::{load_config_offline, load_prompts};

pub(crate) fn cmd_pairs(config_path: &Path) -> Result<()> {
    let config = load_config_offline(config_path)?;
    let prompts = load_prompts(&config)?;

    if prompts.is_empty() {
        println!("No prompt templates in {}", config.prompts.dir.display());
        return Ok(());
    }

    println!("{:<8} TARGETS", "SOURCE");
    println!("{}", "-".repeat(32));
    for (source, targets) in prompts.available_pairs() {
        println!("{:<8} {}", source, targets.join(", "));
    }
    Ok(())
}
