//! Operations subject to authorization.

use crate::chat::domain::DirectChannel;
use crate::directory::domain::{Role, Team, User};
use crate::task::domain::{Attachment, Column, Project, Task, TaskField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An operation together with the resource it targets.
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    /// Read a project and its board.
    ViewProject {
        /// Project being read.
        project: &'a Project,
        /// Whether the actor is the assignee of a task in the project.
        holds_task: bool,
    },
    /// Create a project.
    CreateProject,
    /// Assign or unassign users on a project.
    ManageProject(&'a Project),
    /// Read a task.
    ViewTask(&'a Task),
    /// Create a task.
    CreateTask,
    /// Move a task to another column.
    MoveTask {
        /// Task being moved.
        task: &'a Task,
        /// Destination column.
        target: Column,
    },
    /// Directly edit a task field.
    EditField {
        /// Task being edited.
        task: &'a Task,
        /// Field being written.
        field: TaskField,
    },
    /// Append a comment to a task.
    Comment,
    /// Attach a file to a task.
    Attach,
    /// Remove an attachment from a task.
    DeleteAttachment(&'a Attachment),
    /// Create teams or change their membership.
    ManageTeam,
    /// Create users.
    ManageUsers,
    /// Change another user's role.
    ChangeRole {
        /// User whose role changes.
        target: &'a User,
        /// Requested role.
        new_role: Role,
    },
    /// Delete another user.
    DeleteUser(&'a User),
    /// Read a direct conversation.
    ReadDirect(&'a DirectChannel),
    /// Post to a direct conversation.
    PostDirect(&'a DirectChannel),
    /// Read a team conversation.
    ReadTeam(&'a Team),
    /// Post to a team conversation.
    PostTeam(&'a Team),
}

impl Operation<'_> {
    /// Returns the resource-free description of this operation.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::ViewProject { .. } => OperationKind::ViewProject,
            Self::CreateProject => OperationKind::CreateProject,
            Self::ManageProject(_) => OperationKind::ManageProject,
            Self::ViewTask(_) => OperationKind::ViewTask,
            Self::CreateTask => OperationKind::CreateTask,
            Self::MoveTask { .. } => OperationKind::MoveTask,
            Self::EditField { field, .. } => OperationKind::EditField(*field),
            Self::Comment => OperationKind::Comment,
            Self::Attach => OperationKind::Attach,
            Self::DeleteAttachment(_) => OperationKind::DeleteAttachment,
            Self::ManageTeam => OperationKind::ManageTeam,
            Self::ManageUsers => OperationKind::ManageUsers,
            Self::ChangeRole { .. } => OperationKind::ChangeRole,
            Self::DeleteUser(_) => OperationKind::DeleteUser,
            Self::ReadDirect(_) | Self::ReadTeam(_) => OperationKind::ReadChat,
            Self::PostDirect(_) | Self::PostTeam(_) => OperationKind::PostChat,
        }
    }
}

/// Owned, resource-free operation label carried by
/// [`AccessDenied`](super::AccessDenied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "field", rename_all = "snake_case")]
pub enum OperationKind {
    /// See [`Operation::ViewProject`].
    ViewProject,
    /// See [`Operation::CreateProject`].
    CreateProject,
    /// See [`Operation::ManageProject`].
    ManageProject,
    /// See [`Operation::ViewTask`].
    ViewTask,
    /// See [`Operation::CreateTask`].
    CreateTask,
    /// See [`Operation::MoveTask`].
    MoveTask,
    /// See [`Operation::EditField`].
    EditField(TaskField),
    /// See [`Operation::Comment`].
    Comment,
    /// See [`Operation::Attach`].
    Attach,
    /// See [`Operation::DeleteAttachment`].
    DeleteAttachment,
    /// See [`Operation::ManageTeam`].
    ManageTeam,
    /// See [`Operation::ManageUsers`].
    ManageUsers,
    /// See [`Operation::ChangeRole`].
    ChangeRole,
    /// See [`Operation::DeleteUser`].
    DeleteUser,
    /// Reading a direct or team conversation.
    ReadChat,
    /// Posting to a direct or team conversation.
    PostChat,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewProject => f.write_str("view project"),
            Self::CreateProject => f.write_str("create project"),
            Self::ManageProject => f.write_str("manage project"),
            Self::ViewTask => f.write_str("view task"),
            Self::CreateTask => f.write_str("create task"),
            Self::MoveTask => f.write_str("move task"),
            Self::EditField(field) => write!(f, "edit task field '{field}'"),
            Self::Comment => f.write_str("comment on task"),
            Self::Attach => f.write_str("attach file"),
            Self::DeleteAttachment => f.write_str("delete attachment"),
            Self::ManageTeam => f.write_str("manage teams"),
            Self::ManageUsers => f.write_str("manage users"),
            Self::ChangeRole => f.write_str("change role"),
            Self::DeleteUser => f.write_str("delete user"),
            Self::ReadChat => f.write_str("read conversation"),
            Self::PostChat => f.write_str("post to conversation"),
        }
    }
}
