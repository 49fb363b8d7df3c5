//! In-memory file storage for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{FileRef, TaskId},
    ports::{FileStorage, FileStorageError, FileStorageResult, FileUpload},
};

/// Keeps uploaded bytes in memory under `memory://attachments/...` URLs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileStorage {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryFileStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bytes stored under a URL.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .ok()
            .and_then(|objects| objects.get(url).cloned())
    }

    /// Returns the number of stored files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.read().map_or(0, |objects| objects.len())
    }

    /// Returns `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn upload(&self, task_id: TaskId, upload: &FileUpload) -> FileStorageResult<FileRef> {
        let url = format!(
            "memory://attachments/{task_id}/{}/{}",
            uuid::Uuid::new_v4(),
            upload.file_name()
        );
        let file = FileRef::new(url.clone(), upload.file_name()).map_err(FileStorageError::upload)?;
        let mut objects = self
            .objects
            .write()
            .map_err(|err| FileStorageError::upload(std::io::Error::other(err.to_string())))?;
        objects.insert(url, upload.bytes().to_vec());
        Ok(file)
    }

    async fn delete(&self, file: &FileRef) -> FileStorageResult<()> {
        let mut objects = self
            .objects
            .write()
            .map_err(|err| FileStorageError::delete(std::io::Error::other(err.to_string())))?;
        objects.remove(file.url());
        Ok(())
    }
}
