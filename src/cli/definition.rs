//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version)]
#[command(about = "In-memory to-do list with undo and redo")]
#[command(
    long_about = "Manage a to-do list from an interactive menu. Tasks live only for the \
                  session; every change is written to an append-only activity log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to <config dir>/todo-list/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write the activity log here instead of the configured path
    #[arg(long, env = "TODO_LIST_LOG_FILE", value_name = "PATH", conflicts_with = "no_log")]
    pub log_file: Option<PathBuf>,

    /// Do not write an activity log
    #[arg(long)]
    pub no_log: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.no_log);
    }

    #[test]
    fn test_parse_log_options() {
        let cli = Cli::try_parse_from(["todo", "--log-file", "/tmp/x.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/x.log")));

        assert!(Cli::try_parse_from(["todo", "--log-file", "a", "--no-log"]).is_err());
    }

    #[test]
    fn test_parse_completion() {
        let cli = Cli::try_parse_from(["todo", "completion", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completion { shell: Shell::Bash })
        ));
    }
}
