pub mod commands;
pub mod help;
pub mod output;

pub use commands::{run_cli, run_with_args, CliError};
