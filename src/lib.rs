//! todo-list library - Task list with undo/redo history and its console shell

pub mod activity;
pub mod cli;
pub mod config;
pub mod console;
pub mod todo;
