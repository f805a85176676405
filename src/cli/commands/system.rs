//! Handlers for the `config` subcommands.

use std::path::PathBuf;

use crate::config::ConfigManager;

use super::{CliError, CliResult};

pub fn run(args: &[String]) -> CliResult {
    let manager = ConfigManager::new()?;
    match args.split_first() {
        Some((action, tail)) => match (action.as_str(), tail) {
            ("show", []) => show(&manager),
            ("set-data-dir", [path]) => set_data_dir(&manager, PathBuf::from(path)),
            ("clear-data-dir", []) => clear_data_dir(&manager),
            _ => Err(CliError::Usage(
                "usage: config show|set-data-dir <path>|clear-data-dir".into(),
            )),
        },
        None => show(&manager),
    }
}

fn show(manager: &ConfigManager) -> CliResult {
    let config = manager.load()?;
    println!("Config file: {}", manager.path().display());
    match config.data_dir {
        Some(dir) => println!("Data dir:    {}", dir.display()),
        None => println!("Data dir:    (platform default)"),
    }
    Ok(())
}

fn set_data_dir(manager: &ConfigManager, dir: PathBuf) -> CliResult {
    let mut config = manager.load()?;
    config.data_dir = Some(dir);
    manager.save(&config)?;
    println!("Data dir updated.");
    Ok(())
}

fn clear_data_dir(manager: &ConfigManager) -> CliResult {
    let mut config = manager.load()?;
    config.data_dir = None;
    manager.save(&config)?;
    println!("Data dir reset to the platform default.");
    Ok(())
}
