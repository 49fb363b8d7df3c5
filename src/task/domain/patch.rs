//! Request values for creating and editing tasks.

use super::{Column, Priority, TaskField};
use crate::directory::domain::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Values for a task about to be created.
///
/// Only the title is required; priority defaults to
/// [`Priority::Medium`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    priority: Priority,
    assignee_id: Option<UserId>,
    due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Creates a task request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::default(),
            assignee_id: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the requested priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the requested assignee.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<&UserId> {
        self.assignee_id.as_ref()
    }

    /// Returns the requested due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

/// A partial update of directly editable task fields.
///
/// Nullable fields use `Option<Option<_>>`: the outer `None` leaves the
/// field untouched, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<Option<String>>,
    due_date: Option<Option<NaiveDate>>,
    priority: Option<Priority>,
    assignee_id: Option<Option<UserId>>,
    column: Option<Column>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: Option<UserId>) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the column.
    #[must_use]
    pub const fn with_column(mut self, column: Column) -> Self {
        self.column = Some(column);
        self
    }

    /// Returns the fields this patch writes, in a fixed order.
    #[must_use]
    pub fn fields(&self) -> Vec<TaskField> {
        [
            (self.title.is_some(), TaskField::Title),
            (self.description.is_some(), TaskField::Description),
            (self.due_date.is_some(), TaskField::DueDate),
            (self.priority.is_some(), TaskField::Priority),
            (self.assignee_id.is_some(), TaskField::AssigneeId),
            (self.column.is_some(), TaskField::ColumnId),
        ]
        .into_iter()
        .filter_map(|(present, field)| present.then_some(field))
        .collect()
    }

    /// Returns `true` when the patch writes no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Returns the new title, if patched.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description change, if patched.
    #[must_use]
    pub fn description(&self) -> Option<Option<&str>> {
        self.description.as_ref().map(Option::as_deref)
    }

    /// Returns the due date change, if patched.
    #[must_use]
    pub const fn due_date(&self) -> Option<Option<NaiveDate>> {
        self.due_date
    }

    /// Returns the new priority, if patched.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the assignee change, if patched.
    #[must_use]
    pub fn assignee_id(&self) -> Option<Option<&UserId>> {
        self.assignee_id.as_ref().map(Option::as_ref)
    }

    /// Returns the new column, if patched.
    #[must_use]
    pub const fn column(&self) -> Option<Column> {
        self.column
    }
}
