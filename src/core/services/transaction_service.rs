//! Business logic helpers for managing transactions.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Ledger, Transaction};

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    pub fn add(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<Uuid> {
        validate(&transaction)?;
        Ok(ledger.add_transaction(transaction))
    }

    /// Replaces the transaction identified by `id` via the provided mutator.
    ///
    /// The mutated record is validated before it replaces the stored one, so
    /// a rejected edit leaves the ledger untouched.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let stored = ledger
            .transaction_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        let mut updated = stored.clone();
        mutator(&mut updated);
        updated.id = id;
        validate(&updated)?;
        updated.touch();
        *stored = updated;
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))
    }

    /// Returns a snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }
}

fn validate(transaction: &Transaction) -> ServiceResult<()> {
    if !transaction.amount.is_finite() || transaction.amount <= 0.0 {
        return Err(ServiceError::Invalid(
            "Amount must be greater than zero".into(),
        ));
    }
    if transaction.description.trim().is_empty() {
        return Err(ServiceError::Invalid("Description is required".into()));
    }
    if transaction.category.is_empty() {
        return Err(ServiceError::Invalid("Category is required".into()));
    }
    Ok(())
}
