use anyhow::Result;
use clap::Parser;

use broadside::console::{self, SessionOptions};
use broadside::init_logging;

/// Two-player Battleship at the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix the RNG seed for reproducible random ship placement.
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the pre-round countdown delay.
    #[arg(long)]
    fast: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    console::run(SessionOptions {
        seed: cli.seed,
        fast: cli.fast,
    })
}
