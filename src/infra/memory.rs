use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{AppError, AppResult};
use crate::services::BlobStore;

/// In-memory blob store for tests. Can be told to reject writes, which
/// stands in for the storage-quota failures of the durable backend.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
    reject_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| AppError::Persistence("memory store poisoned".to_string()))?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(AppError::Persistence(
                "write rejected by backing store".to_string(),
            ));
        }
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| AppError::Persistence("memory store poisoned".to_string()))?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
