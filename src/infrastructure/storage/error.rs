//! Storage error types.

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {path} for upload: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Upload failed for {key}: {message}")]
    UploadFailed { key: String, message: String },
}

impl StorageError {
    pub fn read_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReadFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn upload_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UploadFailed {
            key: key.into(),
            message: message.into(),
        }
    }
}
