//! Heuristic spending insights for the current month.

use crate::core::services::ReportService;
use crate::core::time::Clock;
use crate::currency::format_currency;
use crate::domain::{InsightKind, InsightSeverity, Ledger, Month, SpendingInsight};

/// Maximum number of insights returned per call.
const INSIGHT_CAP: usize = 3;
/// Budget usage percentage above which an alert fires.
const BUDGET_ALERT_THRESHOLD: f64 = 90.0;
/// Savings rate above which the month counts as healthy.
const HEALTHY_SAVINGS_RATE: f64 = 20.0;
/// Savings rate below which the month needs attention.
const LOW_SAVINGS_RATE: f64 = 10.0;

/// Derives up to three heuristic observations about recent spending.
pub struct InsightService;

impl InsightService {
    /// Insights for the month containing the clock's today.
    pub fn current(ledger: &Ledger, clock: &dyn Clock) -> Vec<SpendingInsight> {
        Self::for_month(ledger, Month::containing(clock.today()))
    }

    /// Insights for an explicit month.
    ///
    /// Three passes run in fixed order (budget alerts, top category,
    /// savings rate) and the first three results win, so budget alerts can
    /// exhaust the cap before the later passes contribute.
    pub fn for_month(ledger: &Ledger, month: Month) -> Vec<SpendingInsight> {
        let mut insights = Vec::new();

        for comparison in ReportService::budget_comparisons(ledger, month) {
            if comparison.percentage > BUDGET_ALERT_THRESHOLD {
                insights.push(SpendingInsight {
                    severity: InsightSeverity::Warning,
                    kind: InsightKind::BudgetAlert,
                    title: format!("{} Budget Alert", comparison.category),
                    description: format!(
                        "You've spent {:.0}% of your {} budget this month.",
                        comparison.percentage, comparison.category
                    ),
                });
            }
        }

        let month_transactions: Vec<_> = ledger
            .transactions
            .iter()
            .filter(|txn| txn.month() == month)
            .cloned()
            .collect();
        let ranked = ReportService::category_expenses_in(&month_transactions);
        if let Some(top) = ranked.first() {
            insights.push(SpendingInsight {
                severity: InsightSeverity::Info,
                kind: InsightKind::TopCategory,
                title: "Top Spending Category".into(),
                description: format!(
                    "{} accounts for {} of your spending this month.",
                    top.category,
                    format_currency(top.amount)
                ),
            });
        }

        let totals = ReportService::month_totals(ledger, month);
        if totals.income > 0.0 && totals.expenses > 0.0 {
            let rate = (totals.income - totals.expenses) / totals.income * 100.0;
            if rate > HEALTHY_SAVINGS_RATE {
                insights.push(SpendingInsight {
                    severity: InsightSeverity::Success,
                    kind: InsightKind::HealthySavings,
                    title: "Great Savings Rate!".into(),
                    description: format!(
                        "You're saving {rate:.0}% of your income this month. Keep it up!"
                    ),
                });
            } else if rate < LOW_SAVINGS_RATE {
                insights.push(SpendingInsight {
                    severity: InsightSeverity::Warning,
                    kind: InsightKind::LowSavings,
                    title: "Low Savings Rate".into(),
                    description: format!(
                        "Consider reducing expenses to increase your savings rate from {rate:.0}%."
                    ),
                });
            }
        }

        insights.truncate(INSIGHT_CAP);
        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Budget, Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn month() -> Month {
        "2024-03".parse().expect("valid key")
    }

    fn txn(kind: TransactionKind, amount: f64, day: u32, category: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date");
        Transaction::new(kind, amount, date, category, "insight fixture")
    }

    #[test]
    fn empty_ledger_yields_no_insights() {
        let ledger = Ledger::default();
        assert!(InsightService::for_month(&ledger, month()).is_empty());
    }

    #[test]
    fn overspent_budget_raises_a_named_alert() {
        let ledger = Ledger::new(
            vec![txn(TransactionKind::Expense, 95.0, 5, "Food & Dining")],
            vec![Budget::new("Food & Dining", 100.0, month())],
        );
        let insights = InsightService::for_month(&ledger, month());
        assert_eq!(insights[0].kind, InsightKind::BudgetAlert);
        assert_eq!(insights[0].severity, InsightSeverity::Warning);
        assert_eq!(insights[0].title, "Food & Dining Budget Alert");
    }

    #[test]
    fn top_category_names_the_biggest_spender() {
        let ledger = Ledger::new(
            vec![
                txn(TransactionKind::Expense, 30.0, 2, "Travel"),
                txn(TransactionKind::Expense, 70.0, 3, "Shopping"),
            ],
            Vec::new(),
        );
        let insights = InsightService::for_month(&ledger, month());
        let top = insights
            .iter()
            .find(|insight| insight.kind == InsightKind::TopCategory)
            .expect("top category insight");
        assert!(top.description.contains("Shopping"));
        assert!(top.description.contains("$70.00"));
    }

    #[test]
    fn healthy_savings_rate_emits_exactly_one_success() {
        let ledger = Ledger::new(
            vec![
                txn(TransactionKind::Income, 1000.0, 1, "Salary"),
                txn(TransactionKind::Expense, 700.0, 2, "Bills & Utilities"),
            ],
            Vec::new(),
        );
        let insights = InsightService::for_month(&ledger, month());
        let successes: Vec<_> = insights
            .iter()
            .filter(|insight| insight.severity == InsightSeverity::Success)
            .collect();
        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].kind, InsightKind::HealthySavings);
        assert!(successes[0].description.contains("30%"));
    }

    #[test]
    fn middling_savings_rate_stays_quiet() {
        let ledger = Ledger::new(
            vec![
                txn(TransactionKind::Income, 1000.0, 1, "Salary"),
                txn(TransactionKind::Expense, 850.0, 2, "Bills & Utilities"),
            ],
            Vec::new(),
        );
        let insights = InsightService::for_month(&ledger, month());
        assert!(insights.iter().all(|insight| !matches!(
            insight.kind,
            InsightKind::HealthySavings | InsightKind::LowSavings
        )));
    }

    #[test]
    fn budget_alerts_can_exhaust_the_cap() {
        let categories = ["Travel", "Shopping", "Healthcare", "Entertainment"];
        let mut transactions = Vec::new();
        let mut budgets = Vec::new();
        for (day, category) in categories.iter().enumerate() {
            transactions.push(txn(
                TransactionKind::Expense,
                99.0,
                day as u32 + 1,
                category,
            ));
            budgets.push(Budget::new(*category, 100.0, month()));
        }
        let insights = InsightService::for_month(&ledger_from(transactions, budgets), month());
        assert_eq!(insights.len(), 3);
        assert!(insights
            .iter()
            .all(|insight| insight.kind == InsightKind::BudgetAlert));
    }

    fn ledger_from(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Ledger {
        Ledger::new(transactions, budgets)
    }
}
