//! Recording and listing of ledger transactions.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::{Category, Ledger, Transaction, TransactionKind};
use crate::services::{ServiceError, ServiceResult};

/// Optional constraints for listing transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub categories: Option<Vec<Category>>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(from) = self.from {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if transaction.date > to {
                return false;
            }
        }
        if let Some(categories) = &self.categories {
            if !categories.contains(&transaction.category) {
                return false;
            }
        }
        true
    }
}

/// Validated recorder for ledger transactions and their balance effects.
pub struct TransactionService;

impl TransactionService {
    /// Records a transaction from a non-negative magnitude.
    ///
    /// Income (the `Income` category) increases `cash`; every other category
    /// is an expense that decreases `cash` and accrues the round-up
    /// complement to the next whole unit. Validation happens before any
    /// mutation, so a failure leaves the ledger untouched.
    pub fn record(
        ledger: &mut Ledger,
        date: NaiveDate,
        category: Category,
        magnitude: f64,
        description: impl Into<String>,
    ) -> ServiceResult<Uuid> {
        if !magnitude.is_finite() {
            return Err(ServiceError::Ledger(LedgerError::InvalidAmount(format!(
                "amount must be finite, got {magnitude}"
            ))));
        }
        if magnitude < 0.0 {
            return Err(ServiceError::Ledger(LedgerError::InvalidAmount(format!(
                "amount must be a non-negative magnitude, got {magnitude}"
            ))));
        }

        let transaction = Transaction::new(date, category, magnitude, description);
        let id = transaction.id;
        let kind = transaction.kind;
        ledger.append(transaction)?;

        match kind {
            TransactionKind::Income => ledger.cash += magnitude,
            TransactionKind::Expense => {
                ledger.cash -= magnitude;
                ledger.roundups += roundup_for(magnitude);
            }
        }
        tracing::debug!(%id, category = category.as_str(), kind = kind.as_str(), magnitude, "Recorded transaction.");
        Ok(id)
    }

    /// Transactions matching the filter, in insertion order.
    pub fn list<'a>(ledger: &'a Ledger, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        ledger
            .all()
            .iter()
            .filter(|transaction| filter.matches(transaction))
            .collect()
    }

    /// The latest `limit` transactions by date, newest first.
    ///
    /// Same-day entries keep their insertion order relative to each other.
    pub fn recent(ledger: &Ledger, limit: usize) -> Vec<&Transaction> {
        let mut all: Vec<&Transaction> = ledger.all().iter().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date));
        all.truncate(limit);
        all
    }
}

/// Complement of the fractional part to the next whole unit; exactly zero
/// for integral magnitudes.
fn roundup_for(magnitude: f64) -> f64 {
    let fractional = magnitude.fract();
    if fractional > 0.0 {
        1.0 - fractional
    } else {
        0.0
    }
}
