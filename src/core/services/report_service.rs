//! Pure aggregation over the ledger: monthly rollups, category rollups,
//! budget comparisons, and whole-list totals.
//!
//! Every function here is a one-shot transform of its arguments with no
//! caching and no side effects; calling twice with unmutated inputs yields
//! structurally identical output.

use std::collections::BTreeMap;

use crate::domain::{
    category_label, color_for_rank, BudgetComparison, CategoryExpense, Ledger, Month,
    MonthlyExpense, Transaction, TransactionKind,
};

/// Number of trailing months kept in the monthly rollup.
const MONTHLY_WINDOW: usize = 12;

/// Income and expense totals restricted to a single month.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthTotals {
    pub income: f64,
    pub expenses: f64,
}

pub struct ReportService;

impl ReportService {
    /// Expense totals per calendar month, oldest first, truncated to the
    /// most recent twelve months. No expenses yields an empty vec.
    pub fn monthly_expenses(ledger: &Ledger) -> Vec<MonthlyExpense> {
        let mut by_month: BTreeMap<Month, (f64, usize)> = BTreeMap::new();
        for txn in ledger.transactions.iter().filter(|t| t.is_expense()) {
            let entry = by_month.entry(txn.month()).or_insert((0.0, 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }
        let skip = by_month.len().saturating_sub(MONTHLY_WINDOW);
        by_month
            .into_iter()
            .skip(skip)
            .map(|(month, (amount, count))| MonthlyExpense {
                month,
                amount,
                count,
            })
            .collect()
    }

    /// Expense totals per category over the whole ledger, largest first.
    pub fn category_expenses(ledger: &Ledger) -> Vec<CategoryExpense> {
        Self::category_expenses_in(&ledger.transactions)
    }

    /// Expense totals per category over an arbitrary slice, largest first.
    ///
    /// Grouping is in first-seen order and the sort is stable, so equal
    /// totals keep discovery order. Palette colors follow the final rank.
    pub fn category_expenses_in(transactions: &[Transaction]) -> Vec<CategoryExpense> {
        let mut rows: Vec<CategoryExpense> = Vec::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let label = category_label(&txn.category);
            match rows.iter_mut().find(|row| row.category == label) {
                Some(row) => {
                    row.amount += txn.amount;
                    row.count += 1;
                }
                None => rows.push(CategoryExpense {
                    category: label.to_string(),
                    amount: txn.amount,
                    count: 1,
                    color: color_for_rank(0),
                }),
            }
        }
        rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        for (rank, row) in rows.iter_mut().enumerate() {
            row.color = color_for_rank(rank);
        }
        rows
    }

    /// Budget-versus-actual rows for `month`, highest percentage first.
    ///
    /// Rows come from the month's budgets: a budget with no spend shows an
    /// actual of zero, while spend in a category without a budget row is
    /// omitted. A zero budget reports `percentage = 0` rather than
    /// dividing.
    pub fn budget_comparisons(ledger: &Ledger, month: Month) -> Vec<BudgetComparison> {
        let mut actuals: Vec<(String, f64)> = Vec::new();
        for txn in ledger
            .transactions
            .iter()
            .filter(|t| t.is_expense() && t.month() == month)
        {
            let label = category_label(&txn.category);
            match actuals.iter_mut().find(|(category, _)| category == label) {
                Some((_, total)) => *total += txn.amount,
                None => actuals.push((label.to_string(), txn.amount)),
            }
        }

        let mut rows: Vec<BudgetComparison> = ledger
            .budgets_for_month(month)
            .into_iter()
            .map(|budget| {
                let actual = actuals
                    .iter()
                    .find(|(category, _)| *category == budget.category)
                    .map(|(_, total)| *total)
                    .unwrap_or(0.0);
                let remaining = budget.amount - actual;
                let percentage = if budget.amount > 0.0 {
                    actual / budget.amount * 100.0
                } else {
                    0.0
                };
                BudgetComparison {
                    category: budget.category.clone(),
                    budgeted: budget.amount,
                    actual,
                    remaining,
                    percentage,
                    color: color_for_rank(0),
                }
            })
            .collect();
        rows.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        for (rank, row) in rows.iter_mut().enumerate() {
            row.color = color_for_rank(rank);
        }
        rows
    }

    /// Sum of every income amount, no month restriction.
    pub fn total_income(ledger: &Ledger) -> f64 {
        ledger
            .transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of every expense amount, no month restriction.
    pub fn total_expenses(ledger: &Ledger) -> f64 {
        ledger
            .transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum()
    }

    /// Income minus expenses over the whole ledger.
    pub fn balance(ledger: &Ledger) -> f64 {
        Self::total_income(ledger) - Self::total_expenses(ledger)
    }

    /// Income and expense totals for the transactions dated inside `month`.
    pub fn month_totals(ledger: &Ledger, month: Month) -> MonthTotals {
        let mut totals = MonthTotals::default();
        for txn in ledger.transactions.iter().filter(|t| t.month() == month) {
            match txn.kind {
                TransactionKind::Income => totals.income += txn.amount,
                TransactionKind::Expense => totals.expenses += txn.amount,
            }
        }
        totals
    }
}
