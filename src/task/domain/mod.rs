//! Domain model for projects, tasks and the kanban lifecycle.
//!
//! Tasks live in exactly one [`Column`]. All mutations go through
//! [`TaskLifecycle`], which consults the access policy and returns a new
//! task value; infrastructure concerns stay outside the domain boundary.

mod attachment;
mod column;
mod comment;
mod error;
mod field;
mod ids;
mod lifecycle;
mod patch;
mod priority;
mod project;
mod task;

pub use attachment::{Attachment, FileRef};
pub use column::Column;
pub use comment::Comment;
pub use error::{ParseTaskValueError, TaskDomainError};
pub use field::TaskField;
pub use ids::{AttachmentId, CommentId, ProjectId, TaskId};
pub use lifecycle::TaskLifecycle;
pub use patch::{NewTask, TaskPatch};
pub use priority::Priority;
pub use project::{PersistedProjectData, Project};
pub use task::{Assignee, PersistedTaskData, Task};
