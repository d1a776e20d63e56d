//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "timetravel_tui")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cells per board row (3 to 5)
    #[arg(long)]
    pub size: Option<usize>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Draw winning cells like any other cell
    #[arg(long)]
    pub no_highlight: bool,

    /// Leave (row, col) off move labels
    #[arg(long)]
    pub hide_positions: bool,
}
