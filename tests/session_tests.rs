use chrono::NaiveDate;
use finance_core::{
    ledger::{Category, Goal},
    services::{AdvisorService, InsightService, TransactionService},
    session::{Profile, RiskProfile, SessionContext, Snapshot, SubscriptionTier},
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()
}

fn populated_session() -> SessionContext {
    let mut session = SessionContext::new(Profile {
        full_name: "Ada Example".into(),
        email: "ada@example.com".into(),
        subscription: SubscriptionTier::Pro,
        ..Profile::default()
    });
    session
        .ledger
        .initialize_balances(500.0, 2000.0, 1000.0)
        .expect("balances");
    TransactionService::record(&mut session.ledger, date(), Category::Income, 1800.0, "Salary")
        .expect("record");
    TransactionService::record(&mut session.ledger, date(), Category::Groceries, 210.4, "Food")
        .expect("record");
    session.goals.push(Goal::new(
        "Emergency Fund",
        3000.0,
        900.0,
        NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
    ));
    session
}

#[test]
fn snapshot_round_trips_through_its_json_export() {
    let session = populated_session();
    let snapshot = session.export_snapshot();

    let json = snapshot.to_json().expect("serialize");
    let decoded: Snapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, snapshot);

    assert_eq!(decoded.profile.full_name, "Ada Example");
    assert_eq!(decoded.profile.subscription, SubscriptionTier::Pro);
    assert_eq!(decoded.transactions.len(), 2);
    assert_eq!(decoded.goals.len(), 1);
    // The header reflects the recorder's cash updates, not just the seed.
    assert!((decoded.profile.balance - (500.0 + 1800.0 - 210.4)).abs() < 1e-9);
}

#[test]
fn reset_returns_the_session_to_a_fresh_state() {
    let mut session = populated_session();
    AdvisorService::review(&mut session);
    AdvisorService::track_rewards(&mut session);
    assert!(session.rewards > 0);

    session.reset();
    assert_eq!(session.ledger.transaction_count(), 0);
    assert!(session.goals.is_empty());
    assert_eq!(session.rewards, 0);
    assert!(session.risk_profile.is_none());
    // Identity survives a data reset.
    assert_eq!(session.profile.full_name, "Ada Example");
}

#[test]
fn advisor_review_matches_the_balance_mix() {
    let mut session = populated_session();
    // savings 2000, investments 1000: low risk.
    let report = AdvisorService::review(&mut session);
    assert_eq!(report.risk, RiskProfile::Low);
    assert_eq!(session.risk_profile, Some(RiskProfile::Low));
    assert!(report.savings_suggestion.contains("€5000"));

    session.ledger.set_investments(4100.0).expect("investments");
    let report = AdvisorService::review(&mut session);
    assert_eq!(report.risk, RiskProfile::High);
}

#[test]
fn insights_use_session_data_when_available() {
    let session = populated_session();
    let insights = InsightService::generate(&session);
    assert_eq!(insights.len(), 3);
    assert!(insights[0].contains("Groceries"));
    assert!(insights.iter().any(|line| line.contains("Emergency Fund")));
}

#[test]
fn subscription_tiers_gate_premium_features() {
    let mut session = populated_session();
    assert!(session.profile.subscription.has_assistant());

    session.profile.subscription = SubscriptionTier::Basic;
    assert!(!session.profile.subscription.has_assistant());
    assert!(!session.profile.subscription.has_investment_tools());
}
