//! To-do tasks

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::date::DayKey;


/// The identifier of a task.
///
/// This is derived from its creation time (milliseconds since the Unix epoch), and is assigned once and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Pick the id of a task created at `now`.
    ///
    /// Ids must be strictly increasing, so that this falls back to `last + 1` in case the clock did not move forward since `last` was issued.
    /// Returns `None` when `last` is already the greatest possible id.
    pub fn next(now: DateTime<Utc>, last: Option<TaskId>) -> Option<Self> {
        let candidate = now.timestamp_millis();
        match last {
            Some(TaskId(last)) if candidate <= last => last.checked_add(1).map(TaskId),
            _ => Some(TaskId(candidate)),
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The task identifier
    id: TaskId,
    /// The display name of the task
    text: String,
    /// The completion status of this task
    completed: bool,
    /// The day this task should be done by, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DayKey>,
}

impl Task {
    /// Create a brand new, uncompleted task
    pub fn new(id: TaskId, text: String, due_date: Option<DayKey>) -> Self {
        Self::new_with_parameters(id, text, false, due_date)
    }

    /// Create a new Task instance, e.g. when it is read back from storage
    pub fn new_with_parameters(id: TaskId, text: String, completed: bool, due_date: Option<DayKey>) -> Self {
        Self { id, text, completed, due_date }
    }

    pub fn id(&self) -> TaskId      { self.id               }
    pub fn text(&self) -> &str      { &self.text            }
    pub fn completed(&self) -> bool { self.completed        }
    pub fn due_date(&self) -> Option<DayKey> { self.due_date }

    /// Flip the completion status, and return the new one
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
