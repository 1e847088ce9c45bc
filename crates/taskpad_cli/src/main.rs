//! Taskpad console entry point.
//!
//! # Responsibility
//! - Wire the in-memory store to the interactive shell over stdio.
//! - Bootstrap optional file logging from the environment.

use std::io;
use taskpad_core::{default_log_level, init_logging, InMemoryTaskRepository, TaskService};

mod shell;

const LOG_DIR_ENV: &str = "TASKPAD_LOG_DIR";

fn main() -> io::Result<()> {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let mut service = TaskService::new(InMemoryTaskRepository::new());
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_shell(&mut service, &mut stdin.lock(), &mut stdout.lock())
}
