//! todo - In-memory to-do list with undo and redo

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_list::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TODO_LIST_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_list=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
            Ok(())
        }
        None => cli::shell::run(&cli),
    }
}
