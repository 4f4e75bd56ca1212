use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// A single recorded income or expense entry.
///
/// `amount` is signed: income is stored as a positive value, expenses as a
/// negative value, so the sign always agrees with `kind`. Transactions are
/// immutable once created; there is no edit or delete API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: Category,
    pub amount: f64,
    pub description: String,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Builds a transaction from a non-negative magnitude, deriving `kind`
    /// from the category and normalizing the stored sign.
    pub fn new(
        date: NaiveDate,
        category: Category,
        magnitude: f64,
        description: impl Into<String>,
    ) -> Self {
        let kind = TransactionKind::for_category(category);
        let amount = match kind {
            TransactionKind::Income => magnitude,
            TransactionKind::Expense => -magnitude,
        };
        Self {
            id: Uuid::new_v4(),
            date,
            category,
            amount,
            description: description.into(),
            kind,
        }
    }

    /// The unsigned size of the transaction.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }
}

/// Whether a transaction adds to or draws from the cash balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Income iff the category is the distinguished income label.
    pub fn for_category(category: Category) -> Self {
        if category.is_income() {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}
