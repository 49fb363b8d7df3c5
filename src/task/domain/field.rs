//! Directly editable task fields.

use super::ParseTaskValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A task field written through [`TaskPatch`](super::TaskPatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// The task name.
    Title,
    /// Free-form description.
    Description,
    /// Optional due date.
    DueDate,
    /// Priority level.
    Priority,
    /// Assigned user.
    AssigneeId,
    /// Kanban column.
    ColumnId,
}

impl TaskField {
    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::AssigneeId => "assignee_id",
            Self::ColumnId => "column_id",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskField {
    type Error = ParseTaskValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "due_date" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            "assignee_id" => Ok(Self::AssigneeId),
            "column_id" => Ok(Self::ColumnId),
            _ => Err(ParseTaskValueError::Field(value.to_owned())),
        }
    }
}
