//! Rule-based risk profiling, canned suggestions, and reward points.

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;
use crate::session::{RiskProfile, SessionContext};

/// Outcome of a full advisor pass over the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorReport {
    pub risk: RiskProfile,
    pub investment_suggestions: Vec<String>,
    pub savings_suggestion: String,
}

/// Points awarded by a rewards evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardEvent {
    pub points: u32,
    pub reason: String,
}

/// Canned-rule advisor; no model, no market data.
pub struct AdvisorService;

impl AdvisorService {
    const BALANCE_REWARD_THRESHOLD: f64 = 1000.0;
    const ACTIVITY_REWARD_THRESHOLD: usize = 5;

    /// Risk tier from the balance mix: investments more than double savings
    /// is high risk, anything above savings is medium, the rest is low.
    pub fn assess_risk(ledger: &Ledger) -> RiskProfile {
        if ledger.investments > ledger.savings * 2.0 {
            RiskProfile::High
        } else if ledger.investments > ledger.savings {
            RiskProfile::Medium
        } else {
            RiskProfile::Low
        }
    }

    pub fn investment_suggestions(risk: RiskProfile) -> &'static [&'static str] {
        match risk {
            RiskProfile::High => &["Tech Stocks", "Cryptocurrency"],
            RiskProfile::Medium => &["Balanced Mutual Funds", "Index Funds"],
            RiskProfile::Low => &["Government Bonds", "High-Interest Savings Accounts"],
        }
    }

    pub fn savings_goal_suggestion(savings: f64) -> &'static str {
        if savings < 1000.0 {
            "Consider setting a goal to save at least €1000 for emergencies."
        } else if savings < 5000.0 {
            "Aim to save €5000 for a more secure emergency fund."
        } else {
            "Great job! Consider investing your savings for better returns."
        }
    }

    /// Assesses risk, remembers it on the session, and bundles the canned
    /// suggestion sets.
    pub fn review(session: &mut SessionContext) -> AdvisorReport {
        let risk = Self::assess_risk(&session.ledger);
        session.risk_profile = Some(risk);
        tracing::debug!(risk = risk.as_str(), "Assessed risk profile.");
        AdvisorReport {
            risk,
            investment_suggestions: Self::investment_suggestions(risk)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            savings_suggestion: Self::savings_goal_suggestion(session.ledger.savings).to_string(),
        }
    }

    /// Awards points for every criterion currently met and accrues them on
    /// the session. Criteria are re-evaluated on each call; the embedding
    /// layer controls how often that happens.
    pub fn track_rewards(session: &mut SessionContext) -> Vec<RewardEvent> {
        let mut events = Vec::new();
        if session.ledger.cash > Self::BALANCE_REWARD_THRESHOLD {
            events.push(RewardEvent {
                points: 10,
                reason: "Maintained a balance over €1000.".to_string(),
            });
        }
        if session.ledger.transaction_count() > Self::ACTIVITY_REWARD_THRESHOLD {
            events.push(RewardEvent {
                points: 5,
                reason: "Recorded more than 5 transactions.".to_string(),
            });
        }
        for event in &events {
            session.rewards += event.points;
        }
        events
    }
}
