use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Categorises ledger activity for reporting and analytics.
///
/// `Income` is the distinguished income label; every other category marks an
/// expense. The set is closed: free-form labels are rejected at the parse
/// boundary rather than stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Income,
    Groceries,
    Dining,
    Entertainment,
    Transport,
    Shopping,
    Utilities,
    Other,
}

impl Category {
    /// Every recognized category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Income,
        Category::Groceries,
        Category::Dining,
        Category::Entertainment,
        Category::Transport,
        Category::Shopping,
        Category::Utilities,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Groceries => "Groceries",
            Category::Dining => "Dining",
            Category::Entertainment => "Entertainment",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Category::Income)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(label.trim()))
            .copied()
            .ok_or_else(|| LedgerError::UnknownCategory(label.to_string()))
    }
}
