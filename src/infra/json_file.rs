use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;
use crate::services::BlobStore;

/// File-backed blob store: each key lives in its own JSON file under the
/// data directory. Reads tolerate a missing file (empty store); writes
/// replace the whole file.
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }

    fn ensure_directory(path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl BlobStore for JsonFileStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.blob_path(key);
        Self::ensure_directory(&path)?;
        fs::write(&path, value)?;
        Ok(())
    }
}
