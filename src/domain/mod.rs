//! Domain records, month keys, and derived view types.

pub mod budget;
pub mod category;
pub mod common;
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use budget::Budget;
pub use category::{
    category_label, color_for_rank, CATEGORY_COLORS, EXPENSE_CATEGORIES, FALLBACK_CATEGORY,
    INCOME_CATEGORIES,
};
pub use common::{Identifiable, Month, MonthParseError};
pub use ledger::Ledger;
pub use summary::{
    BudgetComparison, CategoryExpense, InsightKind, InsightSeverity, MonthlyExpense,
    SpendingInsight,
};
pub use transaction::{Transaction, TransactionKind};
