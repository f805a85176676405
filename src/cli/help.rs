//! Usage text for the command surface.

use crate::domain::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};

pub fn print_usage() {
    println!("fintrack, a local personal finance tracker");
    println!();
    println!("USAGE:");
    println!("  fintrack [--data-dir <path>] <command> [args]");
    println!();
    println!("COMMANDS:");
    println!("  tx add <income|expense> <amount> <YYYY-MM-DD> <category> <description...>");
    println!("  tx edit <id> <amount> [description...]");
    println!("  tx list");
    println!("  tx rm <id>");
    println!("  budget set <category> <YYYY-MM> <amount>");
    println!("  budget list [YYYY-MM]");
    println!("  budget rm <id>");
    println!("  summary                  income, expenses, and balance");
    println!("  monthly                  expense totals for the last 12 months");
    println!("  categories               expense totals per category");
    println!("  compare [YYYY-MM]        budget versus actual for a month");
    println!("  insights                 heuristic notes on the current month");
    println!("  config show|set-data-dir <path>|clear-data-dir");
    println!("  help");
    println!();
    println!("Expense categories: {}", EXPENSE_CATEGORIES.join(", "));
    println!("Income categories:  {}", INCOME_CATEGORIES.join(", "));
}
