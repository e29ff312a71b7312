use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wealth-planner";
pub(crate) const DB_FILE: &str = "wealth.db";
pub(crate) const BACKUPS_DIR: &str = "backups";

pub fn config_dir() -> Result<PathBuf> {
    config_root()
        .map(|root| root.join(APP_DIR))
        .ok_or_else(|| anyhow!("cannot resolve user configuration directory"))
}

pub fn db_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(DB_FILE))
}

pub fn db_path_under(root: &Path) -> PathBuf {
    root.join(APP_DIR).join(DB_FILE)
}

fn config_root() -> Option<PathBuf> {
    if let Some(path) = dirs::config_dir() {
        return Some(path);
    }

    dirs::home_dir().map(|path| path.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn db_path_is_fixed_layout_under_root() {
        let path = db_path_under(Path::new("/tmp/cfg"));
        assert_eq!(path, Path::new("/tmp/cfg/wealth-planner/wealth.db"));
    }

    #[test]
    fn db_path_stays_absolute_for_absolute_root() {
        let path = db_path_under(Path::new("/var/cfg"));
        assert!(path.is_absolute());
    }

    #[test]
    fn db_path_lives_inside_config_dir() {
        let dir = config_dir().expect("config root should resolve");
        let path = db_path().expect("db path should resolve");
        assert!(path.starts_with(&dir));
        assert_eq!(path.file_name().and_then(|name| name.to_str()), Some("wealth.db"));
    }
}
