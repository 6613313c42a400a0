//! `aidict lookup`: define one word from the terminal.

use std::path::Path;

use anyhow::Result;

use aidict::lookup::Definition;

use super::common::{build_engine, load_config};

pub(crate) async fn cmd_lookup(
    config_path: &Path,
    word: &str,
    source: &str,
    target: &str,
    raw: bool,
    no_persist: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    config.validation.check_word(word)?;

    let engine = build_engine(&config, !no_persist).await?;
    let bytes = engine.get_definition(word, source, target).await?;

    if raw {
        println!("{}", String::from_utf8_lossy(&bytes));
        return Ok(());
    }
    match Definition::from_slice(&bytes) {
        Ok(definition) => print!("{}", format_definition(word, &definition)),
        // Still useful to the user even when the model ignored the schema.
        Err(_) => println!("{}", String::from_utf8_lossy(&bytes)),
    }
    Ok(())
}

fn format_definition(word: &str, definition: &Definition) -> String {
    let mut out = String::new();
    if definition.headword.is_empty() {
        out.push_str(word);
    } else {
        out.push_str(&format!("{}  [{}]", word, definition.headword));
    }
    out.push('\n');
    for (i, entry) in definition.entries.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} {}\n",
            i + 1,
            entry.part_of_speech,
            entry.meaning
        ));
        if !entry.example.is_empty() {
            out.push_str(&format!("     {}\n", entry.example));
        }
    }
    out
}
