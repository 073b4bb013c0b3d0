//! `todo` interactive session: config, activity log, console loop

use anyhow::Result;
use std::io;
use tracing::debug;

use super::Cli;
use crate::activity::{ActivityLog, FileLog, NullLog};
use crate::config::Config;
use crate::console::Console;
use crate::todo::TodoList;

/// Pick the activity log from flags first, then config.
pub fn open_activity_log(cli: &Cli, config: &Config) -> Box<dyn ActivityLog> {
    if cli.no_log || (cli.log_file.is_none() && !config.log.enabled) {
        debug!("Activity log disabled");
        return Box::new(NullLog);
    }

    let path = cli.log_file.clone().unwrap_or_else(|| config.log_path());
    debug!("Activity log at {}", path.display());
    Box::new(FileLog::open(path))
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let list = TodoList::new(open_activity_log(cli, &config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), list);
    let result = console.run();

    let (mut list, _) = console.into_parts();
    if let Err(e) = &result {
        list.note(&format!("An exception occurred: {}", e));
    }
    if let Err(e) = list.close_log() {
        debug!("Failed to close activity log: {}", e);
    }

    result
}
