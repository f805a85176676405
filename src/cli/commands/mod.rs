//! Subcommand dispatch for the fintrack binary.

mod budget;
mod report;
mod system;
mod transaction;

use std::path::PathBuf;

use crate::{
    cli::help,
    config::ConfigManager,
    core::services::ServiceError,
    errors::FinanceError,
    storage::JsonStorage,
};

pub type CliResult = Result<(), CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Finance(#[from] FinanceError),
}

/// Entry point: parses `std::env::args` and dispatches to a handler.
pub fn run_cli() -> CliResult {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_with_args(&args)
}

pub fn run_with_args(args: &[String]) -> CliResult {
    let (data_dir, rest) = split_data_dir(args)?;
    let Some((command, tail)) = rest.split_first() else {
        help::print_usage();
        return Ok(());
    };
    match command.as_str() {
        "tx" | "transaction" => {
            let storage = open_storage(data_dir)?;
            transaction::run(&storage, tail)
        }
        "budget" => {
            let storage = open_storage(data_dir)?;
            budget::run(&storage, tail)
        }
        "summary" => {
            let storage = open_storage(data_dir)?;
            report::summary(&storage)
        }
        "monthly" => {
            let storage = open_storage(data_dir)?;
            report::monthly(&storage)
        }
        "categories" => {
            let storage = open_storage(data_dir)?;
            report::categories(&storage)
        }
        "compare" => {
            let storage = open_storage(data_dir)?;
            report::compare(&storage, tail)
        }
        "insights" => {
            let storage = open_storage(data_dir)?;
            report::insights(&storage)
        }
        "config" => system::run(tail),
        "help" | "--help" | "-h" => {
            help::print_usage();
            Ok(())
        }
        other => Err(CliError::Usage(format!(
            "unknown command `{other}`, try `fintrack help`"
        ))),
    }
}

fn split_data_dir(args: &[String]) -> Result<(Option<PathBuf>, Vec<String>), CliError> {
    let mut data_dir = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--data-dir" {
            let value = iter
                .next()
                .ok_or_else(|| CliError::Usage("--data-dir needs a path".into()))?;
            data_dir = Some(PathBuf::from(value));
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((data_dir, rest))
}

/// Resolves the slot directory: command line flag first, then the config
/// file override, then the platform default.
fn open_storage(cli_dir: Option<PathBuf>) -> Result<JsonStorage, CliError> {
    if let Some(dir) = cli_dir {
        return Ok(JsonStorage::new(Some(dir))?);
    }
    let configured = match ConfigManager::new() {
        Ok(manager) => manager.load()?.data_dir,
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {}", err);
            None
        }
    };
    Ok(JsonStorage::new(configured)?)
}
