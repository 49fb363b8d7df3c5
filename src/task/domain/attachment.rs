//! Task attachments and references to externally stored files.

use super::{AttachmentId, TaskDomainError};
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Retrievable reference to bytes held by the file storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRef {
    url: String,
    file_name: String,
}

impl FileRef {
    /// Creates a validated file reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyFileReference`] when either value is
    /// blank.
    pub fn new(
        url: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let raw_url = url.into();
        let raw_name = file_name.into();
        let trimmed_url = raw_url.trim();
        let trimmed_name = raw_name.trim();
        if trimmed_url.is_empty() || trimmed_name.is_empty() {
            return Err(TaskDomainError::EmptyFileReference);
        }
        Ok(Self {
            url: trimmed_url.to_owned(),
            file_name: trimmed_name.to_owned(),
        })
    }

    /// Returns the retrievable location.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// A file attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    id: AttachmentId,
    file: FileRef,
    uploaded_by: UserId,
    uploaded_at: DateTime<Utc>,
}

impl Attachment {
    /// Creates an attachment record.
    #[must_use]
    pub fn new(file: FileRef, uploaded_by: UserId, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            id: AttachmentId::new(),
            file,
            uploaded_by,
            uploaded_at,
        }
    }

    /// Returns the attachment identifier.
    #[must_use]
    pub const fn id(&self) -> AttachmentId {
        self.id
    }

    /// Returns the stored file reference.
    #[must_use]
    pub const fn file(&self) -> &FileRef {
        &self.file
    }

    /// Returns the uploader's identifier.
    #[must_use]
    pub const fn uploaded_by(&self) -> &UserId {
        &self.uploaded_by
    }

    /// Returns the upload timestamp.
    #[must_use]
    pub const fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }
}
