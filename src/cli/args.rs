use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wealth")]
#[command(about = "A terminal wealth planner", version)]
pub struct Cli {
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Back up the local database file and remove it
    Clean,
}
