use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// How often the user expects income to arrive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum IncomeFrequency {
    #[default]
    Monthly,
    BiWeekly,
    Weekly,
}

/// Plan tier gating the assistant and investment tooling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SubscriptionTier {
    #[default]
    Basic,
    Pro,
    Elite,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Basic => "Basic",
            SubscriptionTier::Pro => "Pro",
            SubscriptionTier::Elite => "Elite",
        }
    }

    /// The scripted assistant is a Pro/Elite feature.
    pub fn has_assistant(&self) -> bool {
        matches!(self, SubscriptionTier::Pro | SubscriptionTier::Elite)
    }

    /// Investment tracking and suggestions are a Pro/Elite feature.
    pub fn has_investment_tools(&self) -> bool {
        matches!(self, SubscriptionTier::Pro | SubscriptionTier::Elite)
    }
}

/// Coarse appetite for investment risk, derived from the balance mix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskProfile {
    Low,
    Medium,
    High,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Low => "Low Risk",
            RiskProfile::Medium => "Medium Risk",
            RiskProfile::High => "High Risk",
        }
    }
}

/// Identity and preferences attached to a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub currency: CurrencyCode,
    pub income_frequency: IncomeFrequency,
    pub subscription: SubscriptionTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_codes_are_uppercased() {
        assert_eq!(CurrencyCode::new("usd").as_str(), "USD");
    }

    #[test]
    fn only_paid_tiers_unlock_the_assistant() {
        assert!(!SubscriptionTier::Basic.has_assistant());
        assert!(SubscriptionTier::Pro.has_assistant());
        assert!(SubscriptionTier::Elite.has_investment_tools());
    }
}
