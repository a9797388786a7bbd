//! Shell context and CLI error types.

use thiserror::Error;

use crate::store::Store;

/// Failures of the shell itself, as opposed to failures of a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Mutable state threaded through the command loop. The store lives here for
/// the whole process; one failed command never tears it down.
pub struct ShellContext {
    pub mode: CliMode,
    pub store: Store,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        Self {
            mode,
            store: Store::new(),
            running: true,
        }
    }
}
