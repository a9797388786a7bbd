pub mod commands;
pub mod core;
pub mod shell;

pub use shell::run_cli;
