//! Task aggregate root.

use super::{Attachment, AttachmentId, Column, Comment, Priority, ProjectId, TaskId};
use crate::directory::domain::{User, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// The user a task is delegated to, with their display name denormalized
/// for board rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    user_id: UserId,
    display_name: String,
}

impl Assignee {
    /// Creates an assignee from a resolved user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id().clone(),
            display_name: user.display_name().to_owned(),
        }
    }

    /// Creates an assignee from persisted values.
    #[must_use]
    pub const fn from_persisted(user_id: UserId, display_name: String) -> Self {
        Self {
            user_id,
            display_name,
        }
    }

    /// Returns the assigned user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the denormalized display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Task aggregate root.
///
/// Tasks are only mutated through [`TaskLifecycle`](super::TaskLifecycle),
/// which checks the access policy before producing a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: Priority,
    assignee: Option<Assignee>,
    column: Column,
    comments: Vec<Comment>,
    attachments: Vec<Attachment>,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted assignee, if any.
    pub assignee: Option<Assignee>,
    /// Persisted column.
    pub column: Column,
    /// Persisted comments in append order.
    pub comments: Vec<Comment>,
    /// Persisted attachments.
    pub attachments: Vec<Attachment>,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Initial values for a new task, already validated by the lifecycle.
pub(super) struct TaskSeed {
    pub(super) project_id: ProjectId,
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) due_date: Option<NaiveDate>,
    pub(super) priority: Priority,
    pub(super) assignee: Option<Assignee>,
    pub(super) created_by: UserId,
}

impl Task {
    pub(super) fn from_seed(seed: TaskSeed, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            project_id: seed.project_id,
            title: seed.title,
            description: seed.description,
            due_date: seed.due_date,
            priority: seed.priority,
            assignee: seed.assignee,
            column: Column::Todo,
            comments: Vec::new(),
            attachments: Vec::new(),
            created_by: seed.created_by,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            assignee: data.assignee,
            column: data.column,
            comments: data.comments,
            attachments: data.attachments,
            created_by: data.created_by,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Returns the assigned user's identifier, if any.
    #[must_use]
    pub fn assignee_id(&self) -> Option<&UserId> {
        self.assignee.as_ref().map(Assignee::user_id)
    }

    /// Returns the denormalized assignee display name, if any.
    #[must_use]
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().map(Assignee::display_name)
    }

    /// Returns the current column.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the comments in append order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the attachments.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns the attachment with the given identifier.
    #[must_use]
    pub fn attachment(&self, attachment_id: AttachmentId) -> Option<&Attachment> {
        self.attachments
            .iter()
            .find(|attachment| attachment.id() == attachment_id)
    }

    /// Returns the creator's identifier.
    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(super) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(super) fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub(super) const fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    pub(super) const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub(super) fn set_assignee(&mut self, assignee: Option<Assignee>) {
        self.assignee = assignee;
    }

    pub(super) const fn set_column(&mut self, column: Column) {
        self.column = column;
    }

    pub(super) fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub(super) fn push_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    pub(super) fn remove_attachment(&mut self, attachment_id: AttachmentId) {
        self.attachments
            .retain(|attachment| attachment.id() != attachment_id);
    }

    /// Clears the assignee after their account is removed from the
    /// directory.
    pub(crate) fn release_assignee(&mut self, clock: &impl Clock) {
        self.assignee = None;
        self.touch(clock);
    }

    /// Updates `updated_at`, never moving it backwards.
    pub(super) fn touch(&mut self, clock: &impl Clock) -> DateTime<Utc> {
        self.updated_at = clock.utc().max(self.updated_at);
        self.updated_at
    }
}
