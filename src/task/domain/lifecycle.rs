//! Permission-gated task lifecycle.
//!
//! Every operation is pure: it takes the current task by reference and
//! returns the next value, leaving persistence to the caller.

use super::{
    Assignee, Attachment, AttachmentId, Column, Comment, CommentId, FileRef, NewTask, Project,
    Task, TaskDomainError, TaskPatch, task::TaskSeed,
};
use crate::access::{AccessPolicy, Actor, Operation};
use crate::config::BoardConfig;
use crate::directory::{
    domain::{User, UserId},
    ports::RoleDirectory,
};
use mockable::Clock;

/// Applies lifecycle operations to tasks under the board configuration.
///
/// # Examples
///
/// ```
/// use projectflow::access::Actor;
/// use projectflow::directory::domain::{DirectorySnapshot, Role, UserId};
/// use projectflow::task::domain::{Column, NewTask, Project, TaskLifecycle};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let manager = Actor::new(UserId::new("mia").expect("valid uid"), Role::Manager);
/// let project = Project::new("Launch", manager.user_id().clone(), &clock).expect("valid");
/// let lifecycle = TaskLifecycle::default();
///
/// let task = lifecycle
///     .create_task(&project, NewTask::new("Write docs"), &manager, &DirectorySnapshot::default(), &clock)
///     .expect("managers create tasks");
/// assert_eq!(task.column(), Column::Todo);
///
/// let moved = lifecycle.move_task(&task, Column::Done, &manager, &clock).expect("managers move tasks");
/// assert_eq!(moved.column(), Column::Done);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskLifecycle {
    config: BoardConfig,
}

impl TaskLifecycle {
    /// Creates a lifecycle with the given limits.
    #[must_use]
    pub const fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Returns the configured limits.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Creates a task in the `todo` column with no comments or attachments.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PermissionDenied`] unless the actor is a
    /// manager or owner, [`TaskDomainError::EmptyTaskName`] or
    /// [`TaskDomainError::TaskNameTooLong`] for an invalid title, and
    /// [`TaskDomainError::UnknownUser`] when the assignee does not resolve.
    pub fn create_task(
        &self,
        project: &Project,
        request: NewTask,
        actor: &Actor,
        directory: &impl RoleDirectory,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        AccessPolicy::check(actor, &Operation::CreateTask)?;
        let title = self.validate_title(request.title())?;
        let assignee = request
            .assignee_id()
            .map(|assignee_id| resolve_assignee(directory, assignee_id))
            .transpose()?;

        let seed = TaskSeed {
            project_id: project.id(),
            title,
            description: normalize_description(request.description()),
            due_date: request.due_date(),
            priority: request.priority(),
            assignee,
            created_by: actor.user_id().clone(),
        };
        Ok(Task::from_seed(seed, clock))
    }

    /// Moves a task to another column.
    ///
    /// Moving to the current column is accepted and still refreshes
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PermissionDenied`] unless the actor is a
    /// manager, an owner or the task's assignee, and
    /// [`TaskDomainError::InvalidColumnTransition`] when the transition
    /// table rejects the move.
    pub fn move_task(
        &self,
        task: &Task,
        target: Column,
        actor: &Actor,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        AccessPolicy::check(actor, &Operation::MoveTask { task, target })?;
        ensure_transition(task.column(), target)?;

        let mut moved = task.clone();
        moved.set_column(target);
        moved.touch(clock);
        Ok(moved)
    }

    /// Applies a field patch.
    ///
    /// The patch is all-or-nothing: if any field is not editable by the
    /// actor, nothing is applied. Patching the assignee always recomputes
    /// the denormalized assignee name. An empty patch returns the task
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PermissionDenied`] for the first field the
    /// actor may not edit, title validation errors, and
    /// [`TaskDomainError::UnknownUser`] when the new assignee does not
    /// resolve.
    pub fn update_fields(
        &self,
        task: &Task,
        patch: &TaskPatch,
        actor: &Actor,
        directory: &impl RoleDirectory,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        for field in patch.fields() {
            AccessPolicy::check(actor, &Operation::EditField { task, field })?;
        }
        if patch.is_empty() {
            return Ok(task.clone());
        }

        let mut updated = task.clone();
        if let Some(title) = patch.title() {
            updated.set_title(self.validate_title(title)?);
        }
        if let Some(description) = patch.description() {
            updated.set_description(normalize_description(description));
        }
        if let Some(due_date) = patch.due_date() {
            updated.set_due_date(due_date);
        }
        if let Some(priority) = patch.priority() {
            updated.set_priority(priority);
        }
        if let Some(assignee_id) = patch.assignee_id() {
            let assignee = assignee_id
                .map(|id| resolve_assignee(directory, id))
                .transpose()?;
            updated.set_assignee(assignee);
        }
        if let Some(column) = patch.column() {
            ensure_transition(task.column(), column)?;
            updated.set_column(column);
        }
        updated.touch(clock);
        Ok(updated)
    }

    /// Appends a comment. Existing comments are never modified.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyComment`] when the text is blank and
    /// [`TaskDomainError::CommentTooLong`] when it exceeds the limit.
    pub fn add_comment(
        &self,
        task: &Task,
        author: &User,
        text: &str,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        AccessPolicy::check(&Actor::from(author), &Operation::Comment)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyComment);
        }
        let length = trimmed.chars().count();
        if length > self.config.max_comment_chars {
            return Err(TaskDomainError::CommentTooLong {
                max: self.config.max_comment_chars,
                actual: length,
            });
        }

        let mut updated = task.clone();
        let created_at = updated.touch(clock);
        updated.push_comment(Comment::new(
            CommentId::new(),
            author.id().clone(),
            author.display_name().to_owned(),
            trimmed.to_owned(),
            created_at,
        ));
        Ok(updated)
    }

    /// Attaches a stored file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PermissionDenied`] when the actor may not
    /// attach files.
    pub fn add_attachment(
        &self,
        task: &Task,
        uploader: &Actor,
        file: FileRef,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        AccessPolicy::check(uploader, &Operation::Attach)?;
        let mut updated = task.clone();
        let uploaded_at = updated.touch(clock);
        updated.push_attachment(Attachment::new(
            file,
            uploader.user_id().clone(),
            uploaded_at,
        ));
        Ok(updated)
    }

    /// Removes an attachment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AttachmentNotFound`] when the attachment is
    /// not on the task, and [`TaskDomainError::PermissionDenied`] unless the
    /// actor uploaded it or is a manager or owner.
    pub fn remove_attachment(
        &self,
        task: &Task,
        actor: &Actor,
        attachment_id: AttachmentId,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        let attachment = task
            .attachment(attachment_id)
            .ok_or(TaskDomainError::AttachmentNotFound(attachment_id))?;
        AccessPolicy::check(actor, &Operation::DeleteAttachment(attachment))?;

        let mut updated = task.clone();
        updated.remove_attachment(attachment_id);
        updated.touch(clock);
        Ok(updated)
    }

    fn validate_title(&self, title: &str) -> Result<String, TaskDomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        let length = trimmed.chars().count();
        if length > self.config.max_title_chars {
            return Err(TaskDomainError::TaskNameTooLong {
                max: self.config.max_title_chars,
                actual: length,
            });
        }
        Ok(trimmed.to_owned())
    }
}

fn ensure_transition(from: Column, to: Column) -> Result<(), TaskDomainError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(TaskDomainError::InvalidColumnTransition { from, to })
    }
}

fn resolve_assignee(
    directory: &impl RoleDirectory,
    assignee_id: &UserId,
) -> Result<Assignee, TaskDomainError> {
    directory
        .user(assignee_id)
        .map(Assignee::from_user)
        .ok_or_else(|| TaskDomainError::UnknownUser(assignee_id.clone()))
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
