//! Stateless services operating on a session snapshot or a mutable ledger.

pub mod advisor_service;
pub mod assistant_service;
pub mod forecast_service;
pub mod goal_service;
pub mod insight_service;
pub mod summary_service;
pub mod transaction_service;

pub use advisor_service::{AdvisorReport, AdvisorService, RewardEvent};
pub use assistant_service::AssistantService;
pub use forecast_service::{ExpenseForecast, ForecastService};
pub use goal_service::{GoalPacing, GoalPatch, GoalService};
pub use insight_service::InsightService;
pub use summary_service::{MonthlyCashflow, SummaryService};
pub use transaction_service::{TransactionFilter, TransactionService};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}
