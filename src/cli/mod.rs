//! CLI command implementations

pub mod definition;
pub mod shell;

pub use definition::{Cli, Commands};
