use rusqlite::Connection;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{config, domain::ConnectivityResult};

/// Creates every missing directory leading to the store file. Safe to call
/// when the directories already exist.
pub fn ensure_store_location(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// Opens the store once, closes it without running a query, and classifies
/// what is left on disk.
pub fn probe_store(path: &Path) -> ConnectivityResult {
    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => return database_error(path, err),
    };
    if let Err((_conn, err)) = conn.close() {
        return database_error(path, err);
    }

    if path.exists() {
        ConnectivityResult::passed(path.to_path_buf())
    } else {
        // SQLite leaves a file behind on open in practice; kept as a guard.
        ConnectivityResult::failed(path.to_path_buf(), "Connection closed but file missing")
    }
}

pub fn check_store(path: &Path) -> ConnectivityResult {
    if let Err(err) = ensure_store_location(path) {
        return filesystem_error(path, err);
    }
    probe_store(path)
}

pub fn run_startup_check() -> ConnectivityResult {
    match config::db_path() {
        Ok(path) => check_store(&path),
        Err(err) => filesystem_error(&PathBuf::new(), err),
    }
}

fn database_error(path: &Path, err: impl std::fmt::Display) -> ConnectivityResult {
    ConnectivityResult::failed(path.to_path_buf(), format!("Database error: {err}"))
}

fn filesystem_error(path: &Path, err: impl std::fmt::Display) -> ConnectivityResult {
    ConnectivityResult::failed(path.to_path_buf(), format!("Filesystem error: {err}"))
}
