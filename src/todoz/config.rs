use crate::error::{Result, TodozError};
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Environment override for the store directory.
pub const DATA_DIR_ENV: &str = "TODOZ_DATA_DIR";

/// Resolve the store directory: `$TODOZ_DATA_DIR` wins, otherwise the
/// platform data dir (e.g. `~/.local/share/todoz` on Linux).
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "todoz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodozError::Store("could not determine a data directory".to_string()))
}
