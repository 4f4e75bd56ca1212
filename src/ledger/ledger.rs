use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::transaction::Transaction;

/// Insertion-ordered transaction store plus the session's scalar balances.
///
/// The store only maintains its own invariants (finite amounts, stable
/// order); applying a transaction's effect to `cash` and `roundups` is the
/// recorder's responsibility. `cash` is advisory: it tracks the replayed
/// income-minus-expense total only as long as every mutation goes through
/// the recorder or the explicit balance setters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub cash: f64,
    pub savings: f64,
    pub investments: f64,
    pub roundups: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            transactions: Vec::new(),
            cash: 0.0,
            savings: 0.0,
            investments: 0.0,
            roundups: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a transaction in insertion order.
    ///
    /// Fails before any mutation when the stored amount is not finite.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        if !transaction.amount.is_finite() {
            return Err(LedgerError::InvalidAmount(format!(
                "transaction amount must be finite, got {}",
                transaction.amount
            )));
        }
        self.transactions.push(transaction);
        self.touch();
        Ok(())
    }

    /// Read-only view of the full sequence.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Empties the sequence and zeroes every balance and the accrual.
    pub fn reset(&mut self) {
        self.transactions.clear();
        self.cash = 0.0;
        self.savings = 0.0;
        self.investments = 0.0;
        self.roundups = 0.0;
        self.touch();
        tracing::info!("Ledger reset to an empty state.");
    }

    /// Seeds the scalar balances during onboarding.
    pub fn initialize_balances(
        &mut self,
        cash: f64,
        savings: f64,
        investments: f64,
    ) -> Result<(), LedgerError> {
        validate_balance("cash", cash)?;
        validate_balance("savings", savings)?;
        validate_balance("investments", investments)?;
        self.cash = cash;
        self.savings = savings;
        self.investments = investments;
        self.touch();
        Ok(())
    }

    /// Replaces the savings balance.
    pub fn set_savings(&mut self, amount: f64) -> Result<(), LedgerError> {
        validate_balance("savings", amount)?;
        self.savings = amount;
        self.touch();
        Ok(())
    }

    /// Replaces the investments balance.
    pub fn set_investments(&mut self, amount: f64) -> Result<(), LedgerError> {
        validate_balance("investments", amount)?;
        self.investments = amount;
        self.touch();
        Ok(())
    }

    /// Adds a manual boost on top of the accrued round-ups.
    pub fn boost_roundups(&mut self, amount: f64) -> Result<(), LedgerError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(LedgerError::InvalidAmount(format!(
                "round-up boost must be a non-negative finite amount, got {amount}"
            )));
        }
        self.roundups += amount;
        self.touch();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_balance(field: &str, amount: f64) -> Result<(), LedgerError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(LedgerError::InvalidAmount(format!(
            "{field} balance must be a non-negative finite amount, got {amount}"
        )));
    }
    Ok(())
}
