//! Rendering helpers for records and derived views.

use colored::Colorize;

use crate::currency::{format_currency, format_date};
use crate::domain::{
    Budget, BudgetComparison, CategoryExpense, InsightKind, InsightSeverity, MonthlyExpense,
    SpendingInsight, Transaction, TransactionKind,
};

pub fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions recorded.");
        return;
    }
    for txn in transactions {
        let amount = format_currency(txn.amount);
        let amount = match txn.kind {
            TransactionKind::Income => format!("+{amount}").green().to_string(),
            TransactionKind::Expense => format!("-{amount}").red().to_string(),
        };
        println!(
            "{}  {:<12} {:>14}  {:<18} {}",
            txn.id,
            format_date(txn.date),
            amount,
            txn.category,
            txn.description
        );
    }
}

pub fn print_budgets(budgets: &[&Budget]) {
    if budgets.is_empty() {
        println!("No budgets defined.");
        return;
    }
    for budget in budgets {
        println!(
            "{}  {}  {:<18} {:>12}",
            budget.id,
            budget.month,
            budget.category,
            format_currency(budget.amount)
        );
    }
}

pub fn print_monthly(rows: &[MonthlyExpense]) {
    if rows.is_empty() {
        println!("No expenses recorded yet.");
        return;
    }
    println!("{:<10} {:>14} {:>8}", "Month", "Spent", "Count");
    for row in rows {
        println!(
            "{:<10} {:>14} {:>8}",
            row.month.label(),
            format_currency(row.amount),
            row.count
        );
    }
}

pub fn print_categories(rows: &[CategoryExpense]) {
    if rows.is_empty() {
        println!("No expenses recorded yet.");
        return;
    }
    println!("  {:<18} {:>14} {:>8}", "Category", "Spent", "Count");
    for row in rows {
        println!(
            "{} {:<18} {:>14} {:>8}",
            swatch(row.color),
            row.category,
            format_currency(row.amount),
            row.count
        );
    }
}

pub fn print_comparisons(rows: &[BudgetComparison]) {
    if rows.is_empty() {
        println!("No budgets defined for that month.");
        return;
    }
    println!(
        "  {:<18} {:>12} {:>12} {:>12} {:>7}",
        "Category", "Budget", "Spent", "Remaining", "Used"
    );
    for row in rows {
        let used = format!("{:.0}%", row.percentage);
        let used = if row.percentage > 100.0 {
            used.red().to_string()
        } else if row.percentage > 90.0 {
            used.yellow().to_string()
        } else {
            used
        };
        println!(
            "{} {:<18} {:>12} {:>12} {:>12} {:>7}",
            swatch(row.color),
            row.category,
            format_currency(row.budgeted),
            format_currency(row.actual),
            format_currency(row.remaining),
            used
        );
    }
}

pub fn print_insights(insights: &[SpendingInsight]) {
    if insights.is_empty() {
        println!("No insights yet. Add transactions and budgets first.");
        return;
    }
    for insight in insights {
        let title = match insight.severity {
            InsightSeverity::Warning => insight.title.yellow().bold().to_string(),
            InsightSeverity::Success => insight.title.green().bold().to_string(),
            InsightSeverity::Info => insight.title.cyan().bold().to_string(),
        };
        println!("{} {}", glyph(insight.kind), title);
        println!("    {}", insight.description);
    }
}

/// Terminal stand-in for each insight kind.
fn glyph(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::BudgetAlert => "[!]",
        InsightKind::TopCategory => "[^]",
        InsightKind::HealthySavings => "[$]",
        InsightKind::LowSavings => "[~]",
    }
}

/// Colored block for a palette hex color, or a plain block when the
/// terminal path cannot parse it.
fn swatch(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => "■".truecolor(r, g, b).to_string(),
        None => "■".to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let raw = hex.strip_prefix('#')?;
    if raw.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(raw, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_hex_colors() {
        assert_eq!(parse_hex("#3B82F6"), Some((0x3B, 0x82, 0xF6)));
        assert_eq!(parse_hex("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex("3B82F6"), None);
        assert_eq!(parse_hex("#XYZ"), None);
    }
}
