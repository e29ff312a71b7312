use anyhow::Result;

use crate::{
    cli::args::{Cli, Command},
    config, db, format,
    maintenance::{self, CleanOutcome},
    tui,
};

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Clean) => clean(),
        None => show_panel(),
    }
}

fn show_panel() -> Result<()> {
    let result = db::run_startup_check();
    let panel = format::connectivity_panel(&result);
    tui::run_tui(&panel)
}

fn clean() -> Result<()> {
    let outcome = maintenance::clean_store(&config::config_dir()?)?;
    report_clean(&outcome);
    Ok(())
}

fn report_clean(outcome: &CleanOutcome) {
    match &outcome.backup_path {
        Some(backup) => {
            println!(
                "Backed up {} to {}",
                outcome.db_path.display(),
                backup.display()
            );
            println!("Removed {}", outcome.db_path.display());
        }
        None => println!("No database at {}", outcome.db_path.display()),
    }
}
