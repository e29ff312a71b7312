use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;


#[derive(Clone, Debug)]
pub struct CleanOutcome {
    pub db_path: PathBuf,
    pub backup_path: Option<PathBuf>,
    pub removed: bool,
}

/// Backs the store file up into `backups/` and removes it. A missing store
/// is not an error; the outcome records that nothing was removed.
pub fn clean_store(config_dir: &Path) -> Result<CleanOutcome> {
    fs::create_dir_all(config_dir)?;

    let db_path = config_dir.join(config::DB_FILE);
    if !db_path.exists() {
        return Ok(CleanOutcome {
            db_path,
            backup_path: None,
            removed: false,
        });
    }

    let backups = config_dir.join(config::BACKUPS_DIR);
    fs::create_dir_all(&backups)?;
    let timestamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-");
    let backup_path = backups.join(format!("wealth.{timestamp}.db"));
    fs::copy(&db_path, &backup_path)?;
    fs::remove_file(&db_path)?;

    Ok(CleanOutcome {
        db_path,
        backup_path: Some(backup_path),
        removed: true,
    })
}
