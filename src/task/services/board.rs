//! Read model for a project's kanban board.

use crate::task::domain::{Column, Project, Task};
use serde::{Deserialize, Serialize};

/// Tasks of one column, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    column: Column,
    tasks: Vec<Task>,
}

impl BoardColumn {
    /// Returns the column.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the tasks in this column.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// A project with its visible tasks grouped by column.
///
/// Every column is present, in [`Column::ALL`] order, even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    project: Project,
    columns: Vec<BoardColumn>,
}

impl Board {
    pub(super) fn new(project: Project, tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut columns: Vec<BoardColumn> = Column::ALL
            .iter()
            .map(|&column| BoardColumn {
                column,
                tasks: Vec::new(),
            })
            .collect();
        for task in tasks {
            if let Some(slot) = columns.iter_mut().find(|slot| slot.column == task.column()) {
                slot.tasks.push(task);
            }
        }
        Self { project, columns }
    }

    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns all columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the tasks in one column.
    #[must_use]
    pub fn tasks_in(&self, column: Column) -> &[Task] {
        self.columns
            .iter()
            .find(|slot| slot.column == column)
            .map_or(&[][..], BoardColumn::tasks)
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.iter().map(|slot| slot.tasks.len()).sum()
    }

    /// Returns `true` when no task is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
