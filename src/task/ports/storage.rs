//! File storage collaborator.

use crate::error::ErrorKind;
use crate::task::domain::{FileRef, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for file storage operations.
pub type FileStorageResult<T> = Result<T, FileStorageError>;

/// Raw bytes submitted for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload payload.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Returns the original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Stores attachment bytes and hands back a retrievable reference.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Uploads a file attached to the given task.
    ///
    /// # Errors
    ///
    /// Returns [`FileStorageError::Upload`] when the backend rejects the
    /// upload.
    async fn upload(&self, task_id: TaskId, upload: &FileUpload) -> FileStorageResult<FileRef>;

    /// Deletes previously uploaded bytes. Deleting an unknown file is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`FileStorageError::Delete`] when the backend fails.
    async fn delete(&self, file: &FileRef) -> FileStorageResult<()>;
}

/// Errors returned by file storage collaborators.
#[derive(Debug, Clone, Error)]
pub enum FileStorageError {
    /// The upload failed.
    #[error("upload failed: {0}")]
    Upload(Arc<dyn std::error::Error + Send + Sync>),

    /// Deleting stored bytes failed.
    #[error("delete failed: {0}")]
    Delete(Arc<dyn std::error::Error + Send + Sync>),
}

impl FileStorageError {
    /// Wraps an upload error.
    pub fn upload(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Upload(Arc::new(err))
    }

    /// Wraps a delete error.
    pub fn delete(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delete(Arc::new(err))
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Upload(_) | Self::Delete(_) => ErrorKind::Persistence,
        }
    }
}
