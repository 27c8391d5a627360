use async_trait::async_trait;
use std::path::Path;

pub mod error;
pub mod s3;

pub use error::{StorageError, StorageResult};

/// Write side of the object store used by the frame publisher.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload the file at `path` to `key` in the configured bucket.
    async fn upload_file(&self, path: &Path, key: &str) -> StorageResult<()>;
}
