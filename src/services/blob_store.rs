use crate::error::AppResult;

/// Durable key-value blob storage, the only persistence substrate the
/// ticket store knows about. Writes are atomic per key; a failed write
/// surfaces as `AppError::Persistence` and is never retried here.
pub trait BlobStore: Send + Sync {
    fn read(&self, key: &str) -> AppResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> AppResult<()>;
}
