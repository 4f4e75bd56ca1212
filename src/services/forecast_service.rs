//! Linear trend-line forecasting over the monthly expense series.

use serde::{Deserialize, Serialize};

use crate::ledger::{Ledger, Period, TransactionKind};
use crate::services::SummaryService;

/// A fitted expense trend and its extrapolated predictions.
///
/// Predictions are returned as-is; a declining trend can extrapolate below
/// zero and the service does not clamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseForecast {
    pub slope: f64,
    pub intercept: f64,
    /// The first predicted period, one month after the last observed one.
    pub start: Period,
    pub predictions: Vec<f64>,
}

/// Deterministic ordinary-least-squares forecaster.
pub struct ForecastService;

impl ForecastService {
    /// Fits a line over the chronological monthly expense magnitudes and
    /// extrapolates `periods` future months.
    ///
    /// Returns `None` with fewer than two distinct months of expense data;
    /// that is a defined absent result, not an error.
    pub fn forecast_expenses(ledger: &Ledger, periods: usize) -> Option<ExpenseForecast> {
        let monthly = SummaryService::by_month(ledger, TransactionKind::Expense);
        if monthly.len() < 2 {
            return None;
        }
        // BTreeMap iteration is already chronological; indices 0..n-1 become
        // the regression's independent variable.
        let series: Vec<f64> = monthly.values().map(|sum| sum.abs()).collect();
        let last_period = *monthly.keys().next_back()?;

        let (slope, intercept) = fit_line(&series);
        let n = series.len();
        let predictions = (0..periods)
            .map(|step| slope * ((n + step) as f64) + intercept)
            .collect();

        Some(ExpenseForecast {
            slope,
            intercept,
            start: last_period.advance(1),
            predictions,
        })
    }
}

/// Least-squares fit of `y = slope * x + intercept` over `x = 0..n-1`.
fn fit_line(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (index, value) in values.iter().enumerate() {
        let dx = index as f64 - mean_x;
        covariance += dx * (value - mean_y);
        variance += dx * dx;
    }
    let slope = covariance / variance;
    (slope, mean_y - slope * mean_x)
}
