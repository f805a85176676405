//! Slot-based persistence for the transaction and budget lists.

pub mod json_backend;

pub use json_backend::JsonStorage;

use crate::{
    domain::{Budget, Ledger, Transaction},
    errors::FinanceError,
};

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Key-value persistence over the two record slots.
///
/// Loads substitute an empty list for missing or unreadable data rather
/// than failing; saves serialize and overwrite the full slot.
pub trait StorageBackend {
    fn load_transactions(&self) -> Vec<Transaction>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
    fn load_budgets(&self) -> Vec<Budget>;
    fn save_budgets(&self, budgets: &[Budget]) -> Result<()>;
}

/// Loads both slots into a fresh in-memory ledger.
pub fn load_ledger(backend: &dyn StorageBackend) -> Ledger {
    Ledger::new(backend.load_transactions(), backend.load_budgets())
}
