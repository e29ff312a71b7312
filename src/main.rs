use anyhow::Result;
use clap::Parser;

use wealth_planner::cli::{args::Cli, commands};

fn main() -> Result<()> {
    commands::dispatch(Cli::parse())
}
