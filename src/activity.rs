//! Append-only activity log
//!
//! Every mutating attempt on the task list is reported here as one line of
//! the form `[YYYY-MM-DD HH:MM:SS] <message>`. Writers never surface errors
//! to the caller: a log that cannot be opened or written is skipped.

use chrono::{DateTime, Local};
use std::cell::RefCell;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

pub const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d %H:%M:%S]";

/// Sink for activity messages.
pub trait ActivityLog {
    fn record(&mut self, message: &str);

    /// Flush and release whatever the sink holds. Later records are dropped.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn format_line(at: DateTime<Local>, message: &str) -> String {
    format!("{} {}", at.format(TIMESTAMP_FORMAT), message)
}

/// Appends timestamped lines to a file.
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
    file: Option<File>,
}

impl FileLog {
    /// Open `path` for appending, creating it and its parent directory.
    ///
    /// Failure to open is not an error: the log is kept but writes are
    /// dropped.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match Self::open_append(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("Cannot open activity log {}: {}", path.display(), e);
                None
            }
        };
        Self { path, file }
    }

    fn open_append(path: &Path) -> io::Result<File> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new().create(true).append(true).open(path)
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

impl ActivityLog for FileLog {
    fn record(&mut self, message: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if let Err(e) = writeln!(file, "{}", format_line(Local::now(), message)) {
            debug!("Failed to write activity log: {}", e);
        }
    }

    fn close(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            debug!("Closed activity log {}", self.path.display());
        }
        Ok(())
    }
}

/// Keeps messages in memory. Clones share the same buffer, so a caller can
/// hand one clone to the task list and read lines back from another.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, without timestamps
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }
}

impl ActivityLog for MemoryLog {
    fn record(&mut self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl ActivityLog for NullLog {
    fn record(&mut self, _message: &str) {}
}
