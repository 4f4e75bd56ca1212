//! Goal collection management, progress, and pacing calculations.

use chrono::{Duration, NaiveDate};

use crate::errors::LedgerError;
use crate::ledger::Goal;
use crate::services::{ServiceError, ServiceResult};

/// Optional-field update applied to a goal in place.
#[derive(Debug, Clone, Default)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub target: Option<f64>,
    pub current: Option<f64>,
    pub due: Option<NaiveDate>,
}

/// How a goal is tracking against the time elapsed toward its due date.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalPacing {
    pub expected_percent: f64,
    pub actual_percent: f64,
    pub on_track: bool,
}

/// Index-addressed CRUD and derived calculations for goals.
///
/// Duplicate names are permitted; position is the only identity.
pub struct GoalService;

impl GoalService {
    /// Days-per-month approximation used for pacing math.
    const DAYS_PER_MONTH: f64 = 30.0;
    /// Assumed runway when judging pacing: one year before the due date.
    const ASSUMED_RUNWAY_DAYS: i64 = 365;
    /// A goal within 90% of its expected progress counts as on track.
    const ON_TRACK_RATIO: f64 = 0.9;

    pub fn add(goals: &mut Vec<Goal>, goal: Goal) -> ServiceResult<()> {
        Self::validate_name(&goal.name)?;
        Self::validate(&goal)?;
        tracing::debug!(name = %goal.name, target = goal.target, "Added goal.");
        goals.push(goal);
        Ok(())
    }

    /// Applies `patch` to the goal at `index`, validating the result.
    pub fn update(goals: &mut [Goal], index: usize, patch: GoalPatch) -> ServiceResult<()> {
        let len = goals.len();
        let goal = goals
            .get_mut(index)
            .ok_or(LedgerError::OutOfBounds { index, len })?;

        let mut updated = goal.clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(target) = patch.target {
            updated.target = target;
        }
        if let Some(current) = patch.current {
            updated.current = current;
        }
        if let Some(due) = patch.due {
            updated.due = due;
        }
        Self::validate_name(&updated.name)?;
        Self::validate(&updated)?;
        *goal = updated;
        Ok(())
    }

    /// Removes and returns the goal at `index`.
    pub fn remove(goals: &mut Vec<Goal>, index: usize) -> ServiceResult<Goal> {
        if index >= goals.len() {
            return Err(LedgerError::OutOfBounds {
                index,
                len: goals.len(),
            }
            .into());
        }
        Ok(goals.remove(index))
    }

    /// Completion percentage, unclamped.
    pub fn progress(goal: &Goal) -> f64 {
        goal.progress_percent()
    }

    /// Months left until the due date: whole days remaining divided by 30,
    /// floored at zero. An approximation, not calendar-accurate.
    pub fn months_remaining(goal: &Goal, today: NaiveDate) -> f64 {
        let days = (goal.due - today).num_days() as f64;
        (days / Self::DAYS_PER_MONTH).max(0.0)
    }

    /// Even monthly contribution that would close the gap by the due date;
    /// absent once the due date has passed.
    pub fn suggested_monthly_contribution(goal: &Goal, today: NaiveDate) -> Option<f64> {
        let months = Self::months_remaining(goal, today);
        if months > 0.0 {
            Some(goal.remaining() / months)
        } else {
            None
        }
    }

    /// Compares actual progress to the progress expected if the goal was set
    /// one year before its due date. Absent before that assumed start.
    pub fn pacing(goal: &Goal, today: NaiveDate) -> Option<GoalPacing> {
        let start = goal.due - Duration::days(Self::ASSUMED_RUNWAY_DAYS);
        let days_passed = (today - start).num_days();
        if days_passed <= 0 {
            return None;
        }
        let expected_percent =
            (days_passed as f64 / Self::ASSUMED_RUNWAY_DAYS as f64).min(1.0) * 100.0;
        let actual_percent = goal.progress_percent();
        Some(GoalPacing {
            expected_percent,
            actual_percent,
            on_track: actual_percent >= expected_percent * Self::ON_TRACK_RATIO,
        })
    }

    fn validate_name(name: &str) -> ServiceResult<()> {
        if name.trim().is_empty() {
            return Err(ServiceError::Invalid("goal name must not be empty".into()));
        }
        Ok(())
    }

    fn validate(goal: &Goal) -> Result<(), LedgerError> {
        if !goal.target.is_finite() || goal.target <= 0.0 {
            return Err(LedgerError::InvalidGoal(format!(
                "target must be a positive finite amount, got {}",
                goal.target
            )));
        }
        if !goal.current.is_finite() || goal.current < 0.0 {
            return Err(LedgerError::InvalidGoal(format!(
                "current amount must be non-negative and finite, got {}",
                goal.current
            )));
        }
        Ok(())
    }
}
