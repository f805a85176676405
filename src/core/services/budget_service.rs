//! Business logic helpers for managing monthly category budgets.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Budget, Ledger, Month};

/// Provides validated upsert helpers for category budgets.
pub struct BudgetService;

impl BudgetService {
    /// Creates or replaces the budget for `(category, month)` and returns
    /// its identifier. Keeps at most one budget per pair.
    pub fn set(
        ledger: &mut Ledger,
        category: impl Into<String>,
        amount: f64,
        month: Month,
    ) -> ServiceResult<Uuid> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ServiceError::Invalid("Category is required".into()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Amount must be greater than zero".into(),
            ));
        }
        if let Some(existing) = ledger.budget_for_mut(&category, month) {
            existing.amount = amount;
            existing.touch();
            return Ok(existing.id);
        }
        Ok(ledger.add_budget(Budget::new(category, amount, month)))
    }

    /// Removes the budget identified by `id`, returning the removed
    /// instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Budget> {
        ledger
            .remove_budget(id)
            .ok_or_else(|| ServiceError::Invalid("Budget not found".into()))
    }

    /// Returns the budgets declared for `month`.
    pub fn for_month(ledger: &Ledger, month: Month) -> Vec<&Budget> {
        ledger.budgets_for_month(month)
    }

    /// Returns a snapshot of all budgets.
    pub fn list(ledger: &Ledger) -> Vec<&Budget> {
        ledger.budgets.iter().collect()
    }
}
