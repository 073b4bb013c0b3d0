//! Interactive menu over any reader/writer pair

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::todo::{parse_description, parse_due_date, Filter, Task, TodoError, TodoList};

const MENU: &str = "\nOptions:\n\
    1. Add Task\n\
    2. Mark Task as Completed\n\
    3. Delete Task\n\
    4. View Tasks\n\
    5. Undo\n\
    6. Redo\n\
    7. Exit\n";

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Complete,
    Delete,
    View,
    Undo,
    Redo,
    Exit,
}

impl MenuChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().parse::<u32>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::Complete),
            3 => Some(Self::Delete),
            4 => Some(Self::View),
            5 => Some(Self::Undo),
            6 => Some(Self::Redo),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    list: TodoList,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, list: TodoList) -> Self {
        Self {
            input,
            output,
            list,
        }
    }

    pub fn into_parts(self) -> (TodoList, W) {
        (self.list, self.output)
    }

    /// Run until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.list.note("To-Do List Manager");

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let keep_going = match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Complete) => self.complete()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::View) => self.view()?,
                Some(MenuChoice::Undo) => {
                    let msg = if self.list.undo() {
                        "Undo completed"
                    } else {
                        "Nothing to undo"
                    };
                    writeln!(self.output, "{}", msg)?;
                    true
                }
                Some(MenuChoice::Redo) => {
                    let msg = if self.list.redo() {
                        "Redo completed"
                    } else {
                        "Nothing to redo"
                    };
                    writeln!(self.output, "{}", msg)?;
                    true
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    false
                }
                None => {
                    writeln!(self.output, "Invalid choice! Please enter a valid option.")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add(&mut self) -> Result<bool> {
        let Some(raw) = self.prompt("Enter task description: ")? else {
            return Ok(false);
        };
        let description = match parse_description(&raw) {
            Ok(d) => d,
            Err(e) => return self.reject(e),
        };

        let Some(raw_date) = self.prompt("Enter due date (YYYY MM DD): ")? else {
            return Ok(false);
        };
        let due = match parse_due_date(&raw_date) {
            Ok(due) => due,
            Err(e) => return self.reject(e),
        };

        self.list.add_task(Task::builder(description).due(due));
        writeln!(self.output, "Task added successfully!")?;
        Ok(true)
    }

    /// Report a validation failure and go back to the menu
    fn reject(&mut self, err: TodoError) -> Result<bool> {
        self.list.note(&err.to_string());
        let msg = match err {
            TodoError::InvalidDate(_) => "Invalid date format".to_string(),
            other => other.to_string(),
        };
        writeln!(self.output, "{}", msg)?;
        Ok(true)
    }

    fn complete(&mut self) -> Result<bool> {
        let Some(raw) = self.prompt("Enter task description to mark as completed: ")? else {
            return Ok(false);
        };

        if self.list.mark_completed(raw.trim()) {
            writeln!(self.output, "Task marked as completed!")?;
        } else {
            writeln!(self.output, "Task not found or already completed!")?;
        }
        Ok(true)
    }

    fn delete(&mut self) -> Result<bool> {
        let Some(raw) = self.prompt("Enter task description to delete: ")? else {
            return Ok(false);
        };

        if self.list.delete_task(raw.trim()) {
            writeln!(self.output, "Task deleted!")?;
        } else {
            writeln!(self.output, "Task not found!")?;
        }
        Ok(true)
    }

    fn view(&mut self) -> Result<bool> {
        writeln!(self.output, "Filter options: all, completed, pending")?;
        let Some(raw) = self.prompt("Enter filter option: ")? else {
            return Ok(false);
        };
        // Anything unrecognised shows every task
        let filter = Filter::parse(&raw).unwrap_or_default();

        for line in self.list.view_lines(filter) {
            writeln!(self.output, "{}", line)?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::MemoryLog;
    use std::io::Cursor;

    fn run_session(script: &str) -> (TodoList, String, MemoryLog) {
        let log = MemoryLog::new();
        let list = TodoList::new(Box::new(log.clone()));
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new(), list);
        console.run().unwrap();
        let (list, output) = console.into_parts();
        (list, String::from_utf8(output).unwrap(), log)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 7\n"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (list, output, log) = run_session("7\n");
        assert!(list.is_empty());
        assert!(output.contains("1. Add Task"));
        assert!(output.ends_with("Exiting...\n"));
        assert_eq!(log.lines(), vec!["To-Do List Manager"]);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (list, output, _log) = run_session("1\nHalf typed\n");
        assert!(list.is_empty());
        assert!(!output.contains("Exiting..."));
    }

    #[test]
    fn test_add_and_view() {
        let (list, output, _log) = run_session("1\nBuy milk\n2024 01 01\n4\nall\n7\n");
        assert_eq!(list.len(), 1);
        assert!(output.contains("Task added successfully!"));
        assert!(output.contains("Buy milk - Pending, Due: 2024-1-1\n"));
    }

    #[test]
    fn test_invalid_date_returns_to_menu() {
        let (list, output, log) = run_session("1\nBuy milk\n2024-01-01\n7\n");
        assert!(list.is_empty());
        assert!(output.contains("Invalid date format\n"));
        assert!(output.contains("Exiting..."));
        assert!(log
            .lines()
            .iter()
            .any(|l| l.starts_with("Invalid date format")));
    }

    #[test]
    fn test_empty_description_rejected() {
        let (list, output, _log) = run_session("1\n   \n7\n");
        assert!(list.is_empty());
        assert!(output.contains("Description cannot be empty"));
        assert!(!output.contains("Enter due date"));
    }

    #[test]
    fn test_invalid_choice() {
        let (_list, output, _log) = run_session("9\nabc\n7\n");
        assert_eq!(
            output
                .matches("Invalid choice! Please enter a valid option.")
                .count(),
            2
        );
    }

    #[test]
    fn test_unknown_filter_shows_all() {
        let script = "1\nA\n2024 1 1\n1\nB\n2024 1 2\n2\nA\n4\nsoon\n7\n";
        let (_list, output, _log) = run_session(script);
        assert!(output.contains("A - Completed, Due: 2024-1-1"));
        assert!(output.contains("B - Pending, Due: 2024-1-2"));
    }

    #[test]
    fn test_todo_is_not_a_filter_alias() {
        let script = "1\nA\n2024 1 1\n1\nB\n2024 1 2\n2\nA\n4\ntodo\n7\n";
        let (_list, output, _log) = run_session(script);
        assert!(output.contains("A - Completed, Due: 2024-1-1"));
        assert!(output.contains("B - Pending, Due: 2024-1-2"));
    }

    #[test]
    fn test_empty_view() {
        let (_list, output, _log) = run_session("4\npending\n7\n");
        assert!(output.contains("Enter filter option: \nOptions:"));
    }
}
