use uuid::Uuid;

use super::{
    budget::Budget,
    common::{Identifiable, Month},
    transaction::Transaction,
};

/// In-memory state object owning the transaction and budget lists.
///
/// One caller holds the ledger exclusively and passes it by reference into
/// the report services, which stay stateless. Mutations go through the
/// service layer; persistence is the caller's responsibility after each
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        let index = position_of(&self.transactions, id)?;
        self.transactions.get_mut(index)
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let index = position_of(&self.transactions, id)?;
        Some(self.transactions.remove(index))
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        find_by_id(&self.budgets, id)
    }

    /// Budget declared for a category in a month, if any.
    pub fn budget_for(&self, category: &str, month: Month) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|budget| budget.month == month && budget.category == category)
    }

    pub fn budget_for_mut(&mut self, category: &str, month: Month) -> Option<&mut Budget> {
        self.budgets
            .iter_mut()
            .find(|budget| budget.month == month && budget.category == category)
    }

    pub fn add_budget(&mut self, budget: Budget) -> Uuid {
        let id = budget.id;
        self.budgets.push(budget);
        id
    }

    pub fn remove_budget(&mut self, id: Uuid) -> Option<Budget> {
        let index = position_of(&self.budgets, id)?;
        Some(self.budgets.remove(index))
    }

    pub fn budgets_for_month(&self, month: Month) -> Vec<&Budget> {
        self.budgets
            .iter()
            .filter(|budget| budget.month == month)
            .collect()
    }
}

fn find_by_id<T: Identifiable>(records: &[T], id: Uuid) -> Option<&T> {
    records.iter().find(|record| record.id() == id)
}

fn position_of<T: Identifiable>(records: &[T], id: Uuid) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}
