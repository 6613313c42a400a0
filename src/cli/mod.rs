//! CLI definitions and dispatch.

mod common;
mod lookup;
mod pairs;
mod serve;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aidict::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "aidict")]
#[command(version)]
#[command(about = "LLM-backed dictionary with a persistent cache")]
pub(crate) struct Cli {
    /// Path to the YAML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Look up a single word and print the definition
    Lookup {
        /// Word to define
        word: String,
        /// Source language code
        #[arg(short, long)]
        source: String,
        /// Target language code
        #[arg(short, long)]
        target: String,
        /// Print the cached JSON instead of a formatted entry
        #[arg(long)]
        raw: bool,
        /// Use a throwaway in-memory cache instead of the database
        #[arg(long)]
        no_persist: bool,
    },
    /// List the language pairs the prompt directory supports
    Pairs,
}

/// Install the global tracing subscriber. Logs go to stderr so command
/// output on stdout stays clean.
pub(crate) fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::cmd_serve(&cli.config).await,
        Commands::Lookup {
            word,
            source,
            target,
            raw,
            no_persist,
        } => lookup::cmd_lookup(&cli.config, &word, &source, &target, raw, no_persist).await,
        Commands::Pairs => pairs::cmd_pairs(&cli.config),
    }
}
