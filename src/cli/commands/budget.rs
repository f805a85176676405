//! Handlers for the `budget` subcommands.

use uuid::Uuid;

use crate::{
    cli::output,
    core::services::BudgetService,
    domain::Month,
    storage::{self, StorageBackend},
};

use super::{CliError, CliResult};

pub fn run(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    match args.split_first() {
        Some((action, tail)) => match action.as_str() {
            "set" => set(storage, tail),
            "list" => list(storage, tail),
            "rm" | "remove" => remove(storage, tail),
            other => Err(CliError::Usage(format!("unknown budget action `{other}`"))),
        },
        None => Err(CliError::Usage(
            "budget needs an action (set, list, rm)".into(),
        )),
    }
}

fn set(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    let [category, month, amount] = args else {
        return Err(CliError::Usage(
            "usage: budget set <category> <YYYY-MM> <amount>".into(),
        ));
    };
    let month = parse_month(month)?;
    let amount: f64 = amount
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid amount `{amount}`")))?;

    let mut ledger = storage::load_ledger(storage);
    let id = BudgetService::set(&mut ledger, category.clone(), amount, month)?;
    storage.save_budgets(&ledger.budgets)?;
    println!("Set budget {id} for {category} in {month}");
    Ok(())
}

fn list(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    let ledger = storage::load_ledger(storage);
    match args {
        [] => output::print_budgets(&BudgetService::list(&ledger)),
        [month] => {
            let month = parse_month(month)?;
            output::print_budgets(&BudgetService::for_month(&ledger, month));
        }
        _ => return Err(CliError::Usage("usage: budget list [YYYY-MM]".into())),
    }
    Ok(())
}

fn remove(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    let [id] = args else {
        return Err(CliError::Usage("usage: budget rm <id>".into()));
    };
    let id: Uuid = id
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid id `{id}`")))?;
    let mut ledger = storage::load_ledger(storage);
    let removed = BudgetService::remove(&mut ledger, id)?;
    storage.save_budgets(&ledger.budgets)?;
    println!("Removed {} budget for {}", removed.category, removed.month);
    Ok(())
}

fn parse_month(raw: &str) -> Result<Month, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid month `{raw}`, expected YYYY-MM")))
}
