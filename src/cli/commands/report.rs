//! Handlers for the read-only report commands.

use colored::Colorize;

use crate::{
    cli::output,
    core::services::{InsightService, ReportService},
    core::time::{Clock, SystemClock},
    currency::format_currency,
    domain::Month,
    storage::{self, StorageBackend},
};

use super::{CliError, CliResult};

pub fn summary(storage: &dyn StorageBackend) -> CliResult {
    let ledger = storage::load_ledger(storage);
    let income = ReportService::total_income(&ledger);
    let expenses = ReportService::total_expenses(&ledger);
    let balance = ReportService::balance(&ledger);
    let balance_text = format_currency(balance);
    let balance_text = if balance < 0.0 {
        balance_text.red().to_string()
    } else {
        balance_text.green().to_string()
    };
    println!("Transactions:   {}", ledger.transactions.len());
    println!("Total income:   {}", format_currency(income));
    println!("Total expenses: {}", format_currency(expenses));
    println!("Balance:        {balance_text}");
    Ok(())
}

pub fn monthly(storage: &dyn StorageBackend) -> CliResult {
    let ledger = storage::load_ledger(storage);
    output::print_monthly(&ReportService::monthly_expenses(&ledger));
    Ok(())
}

pub fn categories(storage: &dyn StorageBackend) -> CliResult {
    let ledger = storage::load_ledger(storage);
    output::print_categories(&ReportService::category_expenses(&ledger));
    Ok(())
}

pub fn compare(storage: &dyn StorageBackend, args: &[String]) -> CliResult {
    let month = match args {
        [] => Month::containing(SystemClock.today()),
        [raw] => raw
            .parse()
            .map_err(|_| CliError::Usage(format!("invalid month `{raw}`, expected YYYY-MM")))?,
        _ => return Err(CliError::Usage("usage: compare [YYYY-MM]".into())),
    };
    let ledger = storage::load_ledger(storage);
    println!("Budgets for {}", month.label());
    output::print_comparisons(&ReportService::budget_comparisons(&ledger, month));
    Ok(())
}

pub fn insights(storage: &dyn StorageBackend) -> CliResult {
    let ledger = storage::load_ledger(storage);
    output::print_insights(&InsightService::current(&ledger, &SystemClock));
    Ok(())
}
