//! The live task list and the operations that mutate it

use tracing::debug;

use super::history::{History, HistoryEntry};
use super::model::{Filter, Snapshot, Task, TaskBuilder, TaskId};
use crate::activity::{ActivityLog, NullLog};

/// Owns the tasks (in insertion order) and their undo/redo history.
pub struct TodoList {
    tasks: Vec<Task>,
    history: History,
    log: Box<dyn ActivityLog>,
    next_id: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new(Box::new(NullLog))
    }
}

impl TodoList {
    pub fn new(log: Box<dyn ActivityLog>) -> Self {
        Self {
            tasks: Vec::new(),
            history: History::new(),
            log,
            next_id: 1,
        }
    }

    /// Write a line to the activity log without touching tasks
    pub fn note(&mut self, message: &str) {
        self.log.record(message);
    }

    /// Release the activity log. Nothing is logged afterwards.
    pub fn close_log(&mut self) -> std::io::Result<()> {
        self.log.close()
    }

    /// Append a task and record its initial state. Returns the assigned id.
    pub fn add_task(&mut self, builder: TaskBuilder) -> TaskId {
        let id = TaskId::from_number(self.next_id);
        self.next_id += 1;

        let task = builder.build(id.clone());
        let position = self.tasks.len();
        self.history.record(HistoryEntry {
            task: id.clone(),
            position,
            before: Snapshot::Deleted,
            after: task.snapshot(),
        });

        debug!(id = %id, position, "Adding task");
        self.log.record(&format!("Task added: {}", task.description()));
        self.tasks.push(task);
        id
    }

    /// Complete the first pending task with this description.
    pub fn mark_completed(&mut self, description: &str) -> bool {
        let found = self
            .tasks
            .iter()
            .position(|t| t.description() == description && !t.completed);

        let Some(position) = found else {
            self.log.record(&format!(
                "Task not found or already completed: {}",
                description
            ));
            return false;
        };

        let task = &mut self.tasks[position];
        let before = task.snapshot();
        task.mark_completed();
        let entry = HistoryEntry {
            task: task.id.clone(),
            position,
            before,
            after: task.snapshot(),
        };
        self.history.record(entry);

        self.log
            .record(&format!("Task marked as completed: {}", description));
        true
    }

    /// Remove the first task with this description.
    pub fn delete_task(&mut self, description: &str) -> bool {
        let Some(position) = self
            .tasks
            .iter()
            .position(|t| t.description() == description)
        else {
            self.log.record(&format!("Task not found: {}", description));
            return false;
        };

        let task = self.tasks.remove(position);
        self.history.record(HistoryEntry {
            task: task.id.clone(),
            position,
            before: task.snapshot(),
            after: Snapshot::Deleted,
        });

        debug!(id = %task.id, position, "Deleted task");
        self.log.record(&format!("Task deleted: {}", description));
        true
    }

    /// Revert the most recent change. Returns `false` when only the baseline
    /// remains.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.undo().cloned() else {
            self.log.record("Undo not possible");
            return false;
        };

        debug!(id = %entry.task, "Undo");
        self.apply(&entry.task, entry.position, &entry.before);
        self.log.record("Undo completed");
        true
    }

    /// Re-apply the most recently undone change.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.redo().cloned() else {
            self.log.record("Redo not possible");
            return false;
        };

        debug!(id = %entry.task, "Redo");
        self.apply(&entry.task, entry.position, &entry.after);
        if entry.after.is_deletion_marker() {
            self.log.record("Redo completed (Task deleted)");
        } else {
            self.log.record("Redo completed");
        }
        true
    }

    /// Bring task `id` to the state held by `snapshot`: remove it for the
    /// deletion marker, restore it in place when live, or reinsert it at
    /// `position` when it had been removed.
    fn apply(&mut self, id: &TaskId, position: usize, snapshot: &Snapshot) {
        let index = self.tasks.iter().position(|t| &t.id == id);

        if snapshot.is_deletion_marker() {
            if let Some(index) = index {
                self.tasks.remove(index);
            }
            return;
        }

        match index {
            Some(index) => {
                self.tasks[index].restore(snapshot);
            }
            None => {
                if let Some(task) = Task::from_snapshot(id.clone(), snapshot) {
                    let position = position.min(self.tasks.len());
                    self.tasks.insert(position, task);
                }
            }
        }
    }

    /// Tasks matching `filter`, in insertion order
    pub fn view_tasks(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Display lines for the tasks matching `filter`
    pub fn view_lines(&self, filter: Filter) -> Vec<String> {
        self.view_tasks(filter)
            .into_iter()
            .map(|t| t.to_string())
            .collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
