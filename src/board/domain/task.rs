//! Task record and status.

use super::{ParseTaskStatusError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which list a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is still being worked on.
    Active,
    /// Task has been completed.
    Finished,
}

impl TaskStatus {
    /// Every status, in board order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work on the board.
///
/// Every field except `status` is fixed at creation. The status can only
/// be changed by [`crate::board::services::TaskStore::change_status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    deadline: String,
    status: TaskStatus,
}

impl Task {
    /// Creates a task in the [`TaskStatus::Active`] state.
    pub(crate) const fn new_active(
        id: TaskId,
        title: String,
        description: String,
        deadline: String,
    ) -> Self {
        Self {
            id,
            title,
            description,
            deadline,
            status: TaskStatus::Active,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the deadline exactly as it was entered.
    #[must_use]
    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
