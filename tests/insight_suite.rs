use chrono::NaiveDate;
use fintrack::{
    core::services::InsightService,
    domain::{Budget, InsightKind, InsightSeverity, Ledger, Month, Transaction, TransactionKind},
};

fn month() -> Month {
    "2024-03".parse().expect("valid key")
}

fn txn(kind: TransactionKind, amount: f64, day: u32, category: &str) -> Transaction {
    let date = NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date");
    Transaction::new(kind, amount, date, category, "insight fixture")
}

#[test]
fn empty_ledger_yields_no_insights() {
    assert!(InsightService::for_month(&Ledger::default(), month()).is_empty());
}

#[test]
fn thirty_percent_savings_emits_exactly_one_success() {
    let ledger = Ledger::new(
        vec![
            txn(TransactionKind::Income, 1000.0, 1, "Salary"),
            txn(TransactionKind::Expense, 700.0, 10, "Bills & Utilities"),
        ],
        Vec::new(),
    );
    let insights = InsightService::for_month(&ledger, month());
    assert!(insights.len() <= 3);
    let successes: Vec<_> = insights
        .iter()
        .filter(|insight| insight.severity == InsightSeverity::Success)
        .collect();
    assert_eq!(successes.len(), 1);
    assert_eq!(successes[0].kind, InsightKind::HealthySavings);
}

#[test]
fn low_savings_rate_warns() {
    let ledger = Ledger::new(
        vec![
            txn(TransactionKind::Income, 1000.0, 1, "Salary"),
            txn(TransactionKind::Expense, 950.0, 10, "Shopping"),
        ],
        Vec::new(),
    );
    let insights = InsightService::for_month(&ledger, month());
    assert!(insights
        .iter()
        .any(|insight| insight.kind == InsightKind::LowSavings
            && insight.severity == InsightSeverity::Warning));
}

#[test]
fn passes_run_in_fixed_order() {
    let ledger = Ledger::new(
        vec![
            txn(TransactionKind::Income, 1000.0, 1, "Salary"),
            txn(TransactionKind::Expense, 95.0, 5, "Food & Dining"),
            txn(TransactionKind::Expense, 605.0, 6, "Travel"),
        ],
        vec![Budget::new("Food & Dining", 100.0, month())],
    );
    let insights = InsightService::for_month(&ledger, month());
    assert_eq!(insights.len(), 3);
    assert_eq!(insights[0].kind, InsightKind::BudgetAlert);
    assert_eq!(insights[0].title, "Food & Dining Budget Alert");
    assert_eq!(insights[1].kind, InsightKind::TopCategory);
    assert!(insights[1].description.contains("Travel"));
    assert_eq!(insights[2].kind, InsightKind::HealthySavings);
}

#[test]
fn other_months_do_not_leak_into_insights() {
    let february = NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date");
    let ledger = Ledger::new(
        vec![Transaction::new(
            TransactionKind::Expense,
            500.0,
            february,
            "Travel",
            "out of month",
        )],
        Vec::new(),
    );
    assert!(InsightService::for_month(&ledger, month()).is_empty());
}
