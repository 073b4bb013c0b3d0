//! xtask - Development tasks for todo-list

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, Shell};
use std::fs;
use std::path::{Path, PathBuf};
use todo_list::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for todo-list")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs,

    /// Write shell completion scripts for every supported shell
    GenCompletions {
        /// Output directory
        #[arg(long, default_value = "docs/completions")]
        out: PathBuf,
    },
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
        Commands::GenCompletions { out } => generate_completions(&out),
    }
}

fn generate_cli_docs() {
    let markdown = clap_markdown::help_markdown::<Cli>();

    let docs_dir = Path::new("docs/cli");
    fs::create_dir_all(docs_dir).expect("Failed to create docs/cli directory");

    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}

fn generate_completions(out: &Path) {
    fs::create_dir_all(out).expect("Failed to create completions directory");

    let mut cmd = Cli::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = generate_to(shell, &mut cmd, "todo", out).expect("Failed to write completions");
        println!("Generated {} completions at {}", shell, path.display());
    }
}
