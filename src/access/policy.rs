//! The authorization table.

use super::{AccessDenied, Actor, Operation};
use crate::directory::domain::{Role, User, UserId};
use crate::task::domain::{Attachment, Column, Project, Task, TaskField};
use tracing::warn;

/// Pure authorization decisions.
///
/// [`AccessPolicy::permits`] is the single source of truth; the `can_*`
/// helpers are views over it for call sites that only hold a role and an
/// identifier.
///
/// # Examples
///
/// ```
/// use projectflow::access::{AccessPolicy, Actor, Operation};
/// use projectflow::directory::domain::{Role, UserId};
///
/// let owner = Actor::new(UserId::new("olivia").expect("valid uid"), Role::Owner);
/// assert!(AccessPolicy::permits(&owner, &Operation::ManageUsers));
///
/// let employee = Actor::new(UserId::new("eve").expect("valid uid"), Role::Employee);
/// assert!(!AccessPolicy::permits(&employee, &Operation::ManageTeam));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Decides whether the actor may perform the operation.
    #[must_use]
    pub fn permits(actor: &Actor, operation: &Operation<'_>) -> bool {
        let role = actor.role();
        let user_id = actor.user_id();
        match *operation {
            Operation::ViewProject {
                project,
                holds_task,
            } => role.is_elevated() || holds_task || project.is_assigned(user_id),
            Operation::CreateProject
            | Operation::ManageProject(_)
            | Operation::CreateTask
            | Operation::ManageTeam => role.is_elevated(),
            Operation::ViewTask(task) | Operation::MoveTask { task, .. } => {
                role.is_elevated() || task.assignee_id() == Some(user_id)
            }
            Operation::EditField { .. } => role.is_elevated(),
            Operation::Comment | Operation::Attach => true,
            Operation::DeleteAttachment(attachment) => {
                role.is_elevated() || attachment.uploaded_by() == user_id
            }
            Operation::ManageUsers => role == Role::Owner,
            Operation::ChangeRole { target, new_role } => {
                role == Role::Owner && target.id() != user_id && target.role() != new_role
            }
            Operation::DeleteUser(target) => role == Role::Owner && target.id() != user_id,
            Operation::ReadDirect(channel) | Operation::PostDirect(channel) => {
                channel.involves(user_id)
            }
            Operation::ReadTeam(team) => role.is_elevated() || team.contains(user_id),
            Operation::PostTeam(team) => team.contains(user_id),
        }
    }

    /// Checks the operation, returning a typed denial on failure.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when [`AccessPolicy::permits`] is `false`.
    pub fn check(actor: &Actor, operation: &Operation<'_>) -> Result<(), AccessDenied> {
        if Self::permits(actor, operation) {
            return Ok(());
        }
        Err(AccessDenied {
            user_id: actor.user_id().clone(),
            role: actor.role(),
            operation: operation.kind(),
        })
    }

    /// Managers and owners see every task; employees see the tasks assigned
    /// to them.
    #[must_use]
    pub fn can_view_task(role: Role, user_id: &UserId, task: &Task) -> bool {
        Self::permits(&actor(role, user_id), &Operation::ViewTask(task))
    }

    /// Managers and owners may move any task; employees only the tasks
    /// assigned to them. Every column is a valid destination.
    #[must_use]
    pub fn can_move_task(role: Role, user_id: &UserId, task: &Task, target: Column) -> bool {
        Self::permits(&actor(role, user_id), &Operation::MoveTask { task, target })
    }

    /// Only managers and owners edit task fields directly.
    #[must_use]
    pub fn can_edit_field(role: Role, user_id: &UserId, task: &Task, field: TaskField) -> bool {
        Self::permits(&actor(role, user_id), &Operation::EditField { task, field })
    }

    /// Every authenticated role may comment.
    #[must_use]
    pub const fn can_comment(_role: Role) -> bool {
        true
    }

    /// Every authenticated role may attach files.
    #[must_use]
    pub const fn can_attach(_role: Role) -> bool {
        true
    }

    /// Managers, owners and the uploader may delete an attachment.
    #[must_use]
    pub fn can_delete_attachment(role: Role, user_id: &UserId, attachment: &Attachment) -> bool {
        Self::permits(
            &actor(role, user_id),
            &Operation::DeleteAttachment(attachment),
        )
    }

    /// Managers and owners manage teams.
    #[must_use]
    pub const fn can_manage_team(role: Role) -> bool {
        role.is_elevated()
    }

    /// Only owners manage users.
    #[must_use]
    pub const fn can_manage_users(role: Role) -> bool {
        matches!(role, Role::Owner)
    }

    /// Rejects self role changes and no-op changes.
    ///
    /// This is the target-side rule only; [`AccessPolicy::permits`] with
    /// [`Operation::ChangeRole`] additionally requires the owner role.
    #[must_use]
    pub fn can_change_role(acting_user_id: &UserId, target: &User, new_role: Role) -> bool {
        target.id() != acting_user_id && target.role() != new_role
    }

    /// Rejects self deletion.
    ///
    /// This is the target-side rule only; [`AccessPolicy::permits`] with
    /// [`Operation::DeleteUser`] additionally requires the owner role.
    #[must_use]
    pub fn can_delete_user(acting_user_id: &UserId, target: &User) -> bool {
        target.id() != acting_user_id
    }

    /// Managers and owners see every project; employees see the projects
    /// they are assigned to or hold a task in.
    #[must_use]
    pub fn can_view_project(
        role: Role,
        user_id: &UserId,
        project: &Project,
        holds_task: bool,
    ) -> bool {
        Self::permits(
            &actor(role, user_id),
            &Operation::ViewProject {
                project,
                holds_task,
            },
        )
    }
}

/// Runs [`AccessPolicy::check`] and records a warning when it fails.
///
/// Services call this instead of `check` so every denial is logged once.
pub(crate) fn authorize(actor: &Actor, operation: &Operation<'_>) -> Result<(), AccessDenied> {
    AccessPolicy::check(actor, operation).inspect_err(log_denial)
}

/// Logs a denied operation.
pub(crate) fn log_denial(denied: &AccessDenied) {
    warn!(
        user_id = %denied.user_id,
        role = %denied.role,
        operation = %denied.operation,
        "operation denied"
    );
}

fn actor(role: Role, user_id: &UserId) -> Actor {
    Actor::new(user_id.clone(), role)
}
