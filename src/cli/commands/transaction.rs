//! Handlers for the `tx` subcommands.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    cli::output,
    core::services::TransactionService,
    domain::{Transaction, TransactionKind},
    storage::{self, StorageBackend},
};

use super::{CliError, CliResult};

pub fn run(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    match args.split_first() {
        Some((action, tail)) => match action.as_str() {
            "add" => add(storage, tail),
            "edit" => edit(storage, tail),
            "list" => list(storage),
            "rm" | "remove" => remove(storage, tail),
            other => Err(CliError::Usage(format!("unknown tx action `{other}`"))),
        },
        None => Err(CliError::Usage(
            "tx needs an action (add, edit, list, rm)".into(),
        )),
    }
}

fn add(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    let [kind, amount, date, category, description @ ..] = args else {
        return Err(CliError::Usage(
            "usage: tx add <income|expense> <amount> <YYYY-MM-DD> <category> <description...>"
                .into(),
        ));
    };
    if description.is_empty() {
        return Err(CliError::Usage("a description is required".into()));
    }
    let kind = parse_kind(kind)?;
    let amount = parse_amount(amount)?;
    let date = parse_date(date)?;

    let mut ledger = storage::load_ledger(storage);
    let txn = Transaction::new(kind, amount, date, category.clone(), description.join(" "));
    let id = TransactionService::add(&mut ledger, txn)?;
    storage.save_transactions(&ledger.transactions)?;
    println!("Added transaction {id}");
    Ok(())
}

fn edit(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    let [id, amount, description @ ..] = args else {
        return Err(CliError::Usage(
            "usage: tx edit <id> <amount> [description...]".into(),
        ));
    };
    let id = parse_id(id)?;
    let amount = parse_amount(amount)?;
    let description = if description.is_empty() {
        None
    } else {
        Some(description.join(" "))
    };

    let mut ledger = storage::load_ledger(storage);
    TransactionService::update(&mut ledger, id, |txn| {
        txn.amount = amount;
        if let Some(description) = description {
            txn.description = description;
        }
    })?;
    storage.save_transactions(&ledger.transactions)?;
    println!("Updated transaction {id}");
    Ok(())
}

fn list(storage: &dyn StorageBackend) -> CliResult {
    let ledger = storage::load_ledger(storage);
    output::print_transactions(&ledger.transactions);
    Ok(())
}

fn remove(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    let [id] = args else {
        return Err(CliError::Usage("usage: tx rm <id>".into()));
    };
    let id = parse_id(id)?;
    let mut ledger = storage::load_ledger(storage);
    let removed = TransactionService::remove(&mut ledger, id)?;
    storage.save_transactions(&ledger.transactions)?;
    println!("Removed `{}`", removed.description);
    Ok(())
}

fn parse_kind(raw: &str) -> Result<TransactionKind, CliError> {
    match raw {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(CliError::Usage(format!(
            "unknown transaction kind `{other}`, expected income or expense"
        ))),
    }
}

fn parse_amount(raw: &str) -> Result<f64, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid amount `{raw}`")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CliError::Usage(format!("invalid date `{raw}`, expected YYYY-MM-DD")))
}

fn parse_id(raw: &str) -> Result<Uuid, CliError> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid id `{raw}`")))
}
