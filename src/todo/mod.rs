//! Task list with linear undo/redo
//!
//! - Task model with snapshot/restore
//! - Two-stack history keyed by task id
//! - The list manager that ties them together and reports to the activity log

pub mod error;
pub mod history;
pub mod manager;
pub mod model;
pub mod parser;

pub use error::{Result, TodoError};
pub use history::{History, HistoryEntry};
pub use manager::TodoList;
pub use model::{Filter, Snapshot, Task, TaskBuilder, TaskId};
pub use parser::{parse_description, parse_due_date};
