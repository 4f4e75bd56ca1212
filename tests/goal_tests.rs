use chrono::{Duration, NaiveDate};
use finance_core::{
    errors::LedgerError,
    ledger::Goal,
    services::{GoalPatch, GoalService, ServiceError},
};

fn due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
}

#[test]
fn progress_matches_the_expected_percentages() {
    let quarter = Goal::new("Emergency Fund", 1000.0, 250.0, due());
    assert_eq!(GoalService::progress(&quarter), 25.0);

    let overfunded = Goal::new("Vacation", 1000.0, 1200.0, due());
    assert_eq!(GoalService::progress(&overfunded), 120.0);
}

#[test]
fn add_validates_name_target_and_current() {
    let mut goals = Vec::new();
    assert!(GoalService::add(&mut goals, Goal::new("A", -1.0, 0.0, due())).is_err());
    assert!(GoalService::add(&mut goals, Goal::new("B", 100.0, -5.0, due())).is_err());
    assert!(GoalService::add(&mut goals, Goal::new("C", f64::NAN, 0.0, due())).is_err());

    let err = GoalService::add(&mut goals, Goal::new("", 100.0, 0.0, due()))
        .expect_err("blank name");
    assert!(matches!(err, ServiceError::Invalid(_)));
    assert!(goals.is_empty());

    GoalService::add(&mut goals, Goal::new("D", 100.0, 0.0, due())).expect("valid goal");
    assert_eq!(goals.len(), 1);
}

#[test]
fn update_and_remove_are_bounds_checked() {
    let mut goals = vec![Goal::new("Car", 5000.0, 500.0, due())];

    let err = GoalService::update(&mut goals, 1, GoalPatch::default())
        .expect_err("index past the end");
    assert!(matches!(
        err,
        ServiceError::Ledger(LedgerError::OutOfBounds { index: 1, len: 1 })
    ));

    let removed = GoalService::remove(&mut goals, 0).expect("remove");
    assert_eq!(removed.name, "Car");
    assert!(goals.is_empty());

    let err = GoalService::remove(&mut goals, 0).expect_err("now empty");
    assert!(matches!(
        err,
        ServiceError::Ledger(LedgerError::OutOfBounds { index: 0, len: 0 })
    ));
}

#[test]
fn update_applies_a_partial_patch() {
    let mut goals = vec![Goal::new("House", 100000.0, 1000.0, due())];
    GoalService::update(
        &mut goals,
        0,
        GoalPatch {
            name: Some("House Deposit".into()),
            current: Some(2500.0),
            ..GoalPatch::default()
        },
    )
    .expect("update");

    assert_eq!(goals[0].name, "House Deposit");
    assert_eq!(goals[0].current, 2500.0);
    assert_eq!(goals[0].target, 100000.0);
    assert_eq!(goals[0].due, due());
}

#[test]
fn contribution_suggestion_follows_the_thirty_day_month() {
    let goal = Goal::new("Bike", 900.0, 0.0, due());

    let ninety_days_out = due() - Duration::days(90);
    let suggested =
        GoalService::suggested_monthly_contribution(&goal, ninety_days_out).expect("suggestion");
    assert!((suggested - 300.0).abs() < 1e-9);

    let overdue = due() + Duration::days(10);
    assert!(GoalService::suggested_monthly_contribution(&goal, overdue).is_none());

    let due_today = due();
    assert!(
        GoalService::suggested_monthly_contribution(&goal, due_today).is_none(),
        "zero months remaining means no suggestion, not a division by zero"
    );
}

#[test]
fn pacing_uses_the_ninety_percent_rule() {
    // 20% through the assumed one-year runway.
    let today = due() - Duration::days(292);
    let goal = Goal::new("Laptop", 1000.0, 180.0, due());
    let pacing = GoalService::pacing(&goal, today).expect("pacing");
    assert!((pacing.expected_percent - 20.0).abs() < 0.1);
    assert!(pacing.on_track, "18% actual vs 20% expected is within 90%");

    let behind = Goal::new("Laptop", 1000.0, 170.0, due());
    let pacing = GoalService::pacing(&behind, today).expect("pacing");
    assert!(!pacing.on_track, "17% actual vs 20% expected is below the line");
}
