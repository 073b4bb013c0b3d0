//! Task data model

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Task ID in format T001, T002, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(pub String);

impl TaskId {
    /// Create a new task ID from number
    pub fn from_number(n: u32) -> Self {
        Self(format!("T{:03}", n))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which tasks a view should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Parse filter from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "completed" => Some(Self::Completed),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

/// Frozen copy of a task's fields at one point in time.
///
/// `Deleted` marks "no task here": the state before a task was added or
/// after it was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Captured {
        description: String,
        completed: bool,
        due: Option<NaiveDate>,
    },
    Deleted,
}

impl Snapshot {
    pub fn is_deletion_marker(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier assigned by the list
    pub id: TaskId,

    description: String,

    /// Whether the task has been completed
    pub completed: bool,

    /// Due date (if any)
    pub due: Option<NaiveDate>,
}

impl Task {
    /// Create a new pending task with no due date
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
            due: None,
        }
    }

    /// Start building a task that has not been given an id yet
    pub fn builder(description: impl Into<String>) -> TaskBuilder {
        TaskBuilder {
            description: description.into(),
            due: None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    /// Mark task as completed
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Captured {
            description: self.description.clone(),
            completed: self.completed,
            due: self.due,
        }
    }

    /// Overwrite fields from a captured snapshot.
    ///
    /// Returns `false` and leaves the task untouched for a deletion marker.
    pub fn restore(&mut self, snapshot: &Snapshot) -> bool {
        match snapshot {
            Snapshot::Captured {
                description,
                completed,
                due,
            } => {
                self.description = description.clone();
                self.completed = *completed;
                self.due = *due;
                true
            }
            _ => false,
        }
    }

    /// Rebuild a task from a captured snapshot
    pub fn from_snapshot(id: TaskId, snapshot: &Snapshot) -> Option<Self> {
        let mut task = Self::new(id, String::new());
        task.restore(snapshot).then_some(task)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}, Due: ", self.description, self.status_label())?;
        match &self.due {
            Some(due) => write!(f, "{}-{}-{}", due.year(), due.month(), due.day()),
            None => write!(f, "unset"),
        }
    }
}

/// Collects task fields before the list hands out an id
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    description: String,
    due: Option<NaiveDate>,
}

impl TaskBuilder {
    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due = Some(date);
        self
    }

    pub fn build(self, id: TaskId) -> Task {
        let mut task = Task::new(id, self.description);
        task.due = self.due;
        task
    }
}
