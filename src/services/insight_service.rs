//! Canned textual insights composed from the aggregation services.

use crate::ledger::TransactionKind;
use crate::services::SummaryService;
use crate::session::SessionContext;

const DEFAULT_INSIGHTS: [&str; 3] = [
    "Starting to track your expenses is the first step to financial freedom.",
    "Consider setting up an emergency fund equal to 3-6 months of expenses.",
    "Regularly reviewing your spending patterns can help identify savings opportunities.",
];

/// Thin presentation adapter turning summaries into dashboard strings.
pub struct InsightService;

impl InsightService {
    pub const MAX_INSIGHTS: usize = 3;

    /// At most [`Self::MAX_INSIGHTS`] lines: top spending category, savings
    /// rate, goal progress, then canned defaults to fill the quota.
    ///
    /// Pure read over the session; safe to regenerate on every render.
    pub fn generate(session: &SessionContext) -> Vec<String> {
        let mut insights = Vec::new();

        if let Ok((category, amount)) =
            SummaryService::top_category(&session.ledger, TransactionKind::Expense)
        {
            insights.push(format!(
                "Your highest spending category is {category} (€{amount:.2})."
            ));
        }

        let (income_total, expense_total) = SummaryService::totals(&session.ledger);
        if let Some(rate) = SummaryService::savings_rate(income_total, expense_total) {
            insights.push(format!("Your current savings rate is {rate:.1}%."));
        }

        for goal in &session.goals {
            insights.push(format!(
                "Your {} goal is {:.1}% complete.",
                goal.name,
                goal.progress_percent()
            ));
        }

        for default in DEFAULT_INSIGHTS {
            if insights.len() >= Self::MAX_INSIGHTS {
                break;
            }
            insights.push(default.to_string());
        }

        insights.truncate(Self::MAX_INSIGHTS);
        insights
    }
}
