use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named savings target.
///
/// `current` is user-set and never derived from the ledger; goals are not
/// automatically funded by transactions. Names need not be unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub due: NaiveDate,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: f64, current: f64, due: NaiveDate) -> Self {
        Self {
            name: name.into(),
            target,
            current,
            due,
        }
    }

    /// Completion percentage, unclamped (over 100 when overfunded).
    pub fn progress_percent(&self) -> f64 {
        self.current / self.target * 100.0
    }

    /// The amount still missing; negative when overfunded.
    pub fn remaining(&self) -> f64 {
        self.target - self.current
    }
}
