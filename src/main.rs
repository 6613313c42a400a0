//! aidict command-line entry point.

mod cli;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    cli::init_logging(cli.log_json);
    cli::run(cli).await
}
