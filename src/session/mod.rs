//! Per-user session state: the ledger, goals, profile, and reward counters.

pub mod profile;

use serde::{Deserialize, Serialize};

use crate::ledger::{Goal, Ledger, Transaction};

pub use profile::{CurrencyCode, IncomeFrequency, Profile, RiskProfile, SubscriptionTier};

/// Owns everything belonging to one logical user session.
///
/// One context exists per session; there are no concurrent mutators within
/// it. An embedding layer serving several independent sessions should wrap
/// each context in its own mutex and never share one across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionContext {
    pub profile: Profile,
    pub ledger: Ledger,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub rewards: u32,
    #[serde(default)]
    pub risk_profile: Option<RiskProfile>,
}

impl SessionContext {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ledger: Ledger::new(),
            goals: Vec::new(),
            rewards: 0,
            risk_profile: None,
        }
    }

    /// Clears every entity back to empty/zero, keeping the identity fields.
    pub fn reset(&mut self) {
        self.ledger.reset();
        self.goals.clear();
        self.rewards = 0;
        self.risk_profile = None;
        tracing::info!("Session state reset.");
    }

    /// Structured export of the session for caller-driven serialization.
    ///
    /// The core does not own an interchange format; callers serialize the
    /// snapshot with whatever serde backend they prefer.
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            profile: SnapshotProfile {
                full_name: self.profile.full_name.clone(),
                email: self.profile.email.clone(),
                subscription: self.profile.subscription,
                balance: self.ledger.cash,
                savings: self.ledger.savings,
                investments: self.ledger.investments,
            },
            transactions: self.ledger.transactions.clone(),
            goals: self.goals.clone(),
        }
    }
}

/// Identity and balance header of an exported [`Snapshot`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotProfile {
    pub full_name: String,
    pub email: String,
    pub subscription: SubscriptionTier,
    pub balance: f64,
    pub savings: f64,
    pub investments: f64,
}

/// Full-session export record: profile header, transactions, goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub profile: SnapshotProfile,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
}

impl Snapshot {
    /// Pretty-printed JSON convenience for download-style exports.
    ///
    /// Callers wanting another interchange format can serialize the
    /// snapshot themselves; nothing in the core depends on this one.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
