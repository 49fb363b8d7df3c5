//! Kanban columns and the transition table between them.

use super::ParseTaskValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kanban lane holding a task. Every task is in exactly one column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Not started.
    #[default]
    Todo,
    /// Being worked on.
    Ongoing,
    /// Finished.
    Done,
    /// Waiting on something outside the task.
    Blocked,
}

impl Column {
    /// All columns in board order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::Ongoing, Self::Done, Self::Blocked];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Ongoing => "ongoing",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }

    /// Returns the columns a task in this column may move to.
    ///
    /// The board is a complete graph: every column, including the current
    /// one, is reachable from every other.
    #[must_use]
    pub const fn reachable_from(self) -> &'static [Self] {
        match self {
            Self::Todo | Self::Ongoing | Self::Done | Self::Blocked => &Self::ALL,
        }
    }

    /// Returns `true` when the transition table allows moving to `target`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.reachable_from().contains(&target)
    }

    /// Returns `true` when no transition leaves this column. No column is
    /// terminal on the board.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.reachable_from().is_empty()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Column {
    type Error = ParseTaskValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "ongoing" => Ok(Self::Ongoing),
            "done" => Ok(Self::Done),
            "blocked" => Ok(Self::Blocked),
            _ => Err(ParseTaskValueError::Column(value.to_owned())),
        }
    }
}
