use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const DATA_DIR_VAR: &str = "CHAMADO_DATA_DIR";
const DEFAULT_DIR_NAME: &str = ".chamado";

/// Directory holding the ticket blobs. `CHAMADO_DATA_DIR` overrides the
/// default of `~/.chamado`; the directory is created lazily on first write.
pub fn data_directory() -> AppResult<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_VAR) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let home = env::var("HOME").map_err(|_| {
        AppError::Configuration("HOME not set; cannot locate the data directory".to_string())
    })?;
    Ok(PathBuf::from(home).join(DEFAULT_DIR_NAME))
}
