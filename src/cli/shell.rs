//! The command loop: interactive readline or script mode over stdin.

use std::io::{self, BufRead, IsTerminal};

use colored::Colorize;
use rustyline::{error::ReadlineError, DefaultEditor};
use shell_words::split;

use crate::cli::commands::dispatch;
use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};

/// Runs the shell until `exit` or end of input. Script mode is selected by
/// the `PAYLATER_CLI_SCRIPT` env var or by piped stdin.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("PAYLATER_CLI_SCRIPT").is_some() || !io::stdin().is_terminal() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode);

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;

    loop {
        if !context.running {
            break;
        }
        match editor.readline("pay-later> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if handle_line(context, trimmed) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if handle_line(context, trimmed) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> LoopControl {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            println!("{}", format!("invalid input: {err}").red());
            return LoopControl::Continue;
        }
    };
    if tokens.is_empty() {
        return LoopControl::Continue;
    }

    match dispatch(context, &tokens) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            LoopControl::Exit
        }
        Ok(LoopControl::Continue) => LoopControl::Continue,
        Err(err) => {
            println!("{}", err.to_string().red());
            LoopControl::Continue
        }
    }
}
