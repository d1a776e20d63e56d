//! Time-travel tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use timetravel_tui::{Cli, TuiConfig, init_tracing, run_tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli)?;
    init_tracing(&config)?;

    run_tui(config).await
}
