use std::path::PathBuf;

/// Outcome of the one-shot startup database check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectivityResult {
    pub ok: bool,
    pub path: PathBuf,
    pub note: String,
}

impl ConnectivityResult {
    pub fn passed(path: PathBuf) -> Self {
        Self {
            ok: true,
            path,
            note: "Database ready".to_string(),
        }
    }

    pub fn failed(path: PathBuf, note: impl Into<String>) -> Self {
        Self {
            ok: false,
            path,
            note: note.into(),
        }
    }
}
