use anyhow::Result;

use wealth_planner::{format, tui};

fn main() -> Result<()> {
    tui::run_tui(&format::welcome_panel())
}
