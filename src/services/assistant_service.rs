//! Scripted assistant: a keyword-matched pattern → template lookup table.
//!
//! This is not a dialogue engine. Each rule pairs a keyword set with a
//! canned handler over the session snapshot; the first rule whose keywords
//! all appear in the query wins.

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use strsim::levenshtein;

use crate::ledger::{Category, Period, TransactionKind};
use crate::services::{GoalService, SummaryService};
use crate::session::SessionContext;

const FALLBACK_REPLY: &str =
    "I can help with your spending, savings rate, budget, and goals. Try asking about one of those.";

const BUDGET_TIPS: &str = "Here are some ways to improve your budget:\n\
1. Track all expenses for at least 30 days to understand your spending patterns\n\
2. Use the 50/30/20 rule: 50% for needs, 30% for wants, and 20% for savings\n\
3. Identify and cut unnecessary subscriptions\n\
4. Set specific financial goals to stay motivated\n\
5. Review and adjust your budget monthly";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryKind {
    DiningSpend,
    SavingsRate,
    BudgetTips,
    GoalPacing,
    TopExpense,
    SpendingTrends,
}

struct ResponseRule {
    keywords: &'static [&'static str],
    kind: QueryKind,
}

static RESPONSE_RULES: Lazy<Vec<ResponseRule>> = Lazy::new(|| {
    vec![
        ResponseRule {
            keywords: &["spend", "dining"],
            kind: QueryKind::DiningSpend,
        },
        ResponseRule {
            keywords: &["savings", "rate"],
            kind: QueryKind::SavingsRate,
        },
        ResponseRule {
            keywords: &["improve", "budget"],
            kind: QueryKind::BudgetTips,
        },
        ResponseRule {
            keywords: &["track", "goals"],
            kind: QueryKind::GoalPacing,
        },
        ResponseRule {
            keywords: &["biggest", "expense"],
            kind: QueryKind::TopExpense,
        },
        ResponseRule {
            keywords: &["spending", "trend"],
            kind: QueryKind::SpendingTrends,
        },
    ]
});

/// Answers the canned financial questions from the session snapshot.
pub struct AssistantService;

impl AssistantService {
    /// Responds to a free-text query. Unmatched queries get a fallback line.
    ///
    /// `today` anchors the relative date math (for example "the last 30
    /// days") so replies stay reproducible.
    pub fn respond(session: &SessionContext, query: &str, today: NaiveDate) -> String {
        match match_rule(query) {
            Some(QueryKind::DiningSpend) => dining_reply(session, today),
            Some(QueryKind::SavingsRate) => savings_rate_reply(session),
            Some(QueryKind::BudgetTips) => BUDGET_TIPS.to_string(),
            Some(QueryKind::GoalPacing) => goal_pacing_reply(session, today),
            Some(QueryKind::TopExpense) => top_expense_reply(session),
            Some(QueryKind::SpendingTrends) => spending_trends_reply(session),
            None => FALLBACK_REPLY.to_string(),
        }
    }
}

/// First rule whose every keyword matches a query token.
fn match_rule(query: &str) -> Option<QueryKind> {
    let tokens: Vec<String> = query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    RESPONSE_RULES
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .all(|keyword| tokens.iter().any(|token| token_matches(token, keyword)))
        })
        .map(|rule| rule.kind)
}

/// Exact or prefix match ("spending" matches "spend"), or within an edit
/// budget scaled to the keyword length so short words stay strict.
fn token_matches(token: &str, keyword: &str) -> bool {
    if token == keyword || token.starts_with(keyword) {
        return true;
    }
    let max_edits = match keyword.len() {
        0..=3 => 0,
        4..=5 => 1,
        _ => 2,
    };
    max_edits > 0 && levenshtein(token, keyword) <= max_edits
}

fn dining_reply(session: &SessionContext, today: NaiveDate) -> String {
    if session.ledger.transaction_count() == 0 {
        return "You don't have any dining transactions recorded yet. Add some transactions so I can analyze your dining expenses.".to_string();
    }
    let since = today - Duration::days(30);
    let spent = SummaryService::spent_in_category_since(&session.ledger, Category::Dining, since);
    format!("In the last 30 days, you spent €{spent:.2} on dining out.")
}

fn savings_rate_reply(session: &SessionContext) -> String {
    if session.ledger.transaction_count() == 0 {
        return "I don't have enough transaction data to calculate your savings rate yet. Please add some income and expense transactions.".to_string();
    }
    let (income_total, expense_total) = SummaryService::totals(&session.ledger);
    match SummaryService::savings_rate(income_total, expense_total) {
        Some(rate) => {
            let mut reply = format!(
                "Your overall savings rate is {rate:.1}%. The recommended savings rate is at least 20%. "
            );
            if rate < 20.0 {
                reply.push_str("You might want to look for ways to increase your savings rate.");
            } else {
                reply.push_str("Great job! You're on track with your savings.");
            }
            reply
        }
        None => "I don't have enough income data to calculate your savings rate yet. Please add your income transactions.".to_string(),
    }
}

fn goal_pacing_reply(session: &SessionContext, today: NaiveDate) -> String {
    if session.goals.is_empty() {
        return "You don't have any financial goals set up yet. Let's set some goals to track your progress!".to_string();
    }
    let mut on_track = Vec::new();
    let mut off_track = Vec::new();
    for goal in &session.goals {
        if let Some(pacing) = GoalService::pacing(goal, today) {
            if pacing.on_track {
                on_track.push(goal.name.clone());
            } else {
                off_track.push(goal.name.clone());
            }
        }
    }
    match (on_track.is_empty(), off_track.is_empty()) {
        (false, false) => format!(
            "You're on track with these goals: {}. However, you're falling behind on: {}. Consider adjusting your monthly contributions to catch up.",
            on_track.join(", "),
            off_track.join(", ")
        ),
        (false, true) => format!(
            "Great news! You're on track with all your goals: {}. Keep up the good work!",
            on_track.join(", ")
        ),
        (true, false) => format!(
            "You're currently behind on all your goals: {}. Let's review your budget to find ways to increase your contributions.",
            off_track.join(", ")
        ),
        (true, true) => {
            "Your goals are still far from their target dates; check back closer to them."
                .to_string()
        }
    }
}

fn top_expense_reply(session: &SessionContext) -> String {
    match SummaryService::top_category(&session.ledger, TransactionKind::Expense) {
        Ok((category, amount)) => {
            let (_, expense_total) = SummaryService::totals(&session.ledger);
            let share = amount / expense_total * 100.0;
            format!(
                "Your biggest expense category is {category}, where you've spent €{amount:.2}. This represents {share:.1}% of your total expenses."
            )
        }
        Err(_) => "I don't have enough expense data to determine your biggest category. Please add more expense transactions.".to_string(),
    }
}

fn spending_trends_reply(session: &SessionContext) -> String {
    let series =
        SummaryService::by_month_category(&session.ledger, TransactionKind::Expense);
    let mut periods: Vec<Period> = series.keys().map(|(period, _)| *period).collect();
    periods.dedup();
    if periods.len() < 2 {
        return "I need at least two months of expenses to read your spending trends. Keep recording transactions!".to_string();
    }
    let latest = periods[periods.len() - 1];
    let previous = periods[periods.len() - 2];

    let mut rising = Vec::new();
    let mut falling = Vec::new();
    for (&(period, category), &amount) in &series {
        if period != latest {
            continue;
        }
        let before = series.get(&(previous, category)).copied().unwrap_or(0.0);
        if amount > before {
            rising.push(category.to_string());
        } else if amount < before {
            falling.push(category.to_string());
        }
    }
    // Categories that vanished since the previous month fell to zero.
    for &(period, category) in series.keys() {
        if period == previous && !series.contains_key(&(latest, category)) {
            falling.push(category.to_string());
        }
    }

    match (rising.is_empty(), falling.is_empty()) {
        (true, true) => format!(
            "Your spending between {previous} and {latest} was flat across categories."
        ),
        (false, true) => format!(
            "Between {previous} and {latest}, spending rose in {}.",
            rising.join(", ")
        ),
        (true, false) => format!(
            "Between {previous} and {latest}, spending fell in {}.",
            falling.join(", ")
        ),
        (false, false) => format!(
            "Between {previous} and {latest}, spending rose in {} and fell in {}.",
            rising.join(", "),
            falling.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Goal;
    use crate::services::TransactionService;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()
    }

    fn session_with_activity() -> SessionContext {
        let mut session = SessionContext::default();
        TransactionService::record(
            &mut session.ledger,
            today() - Duration::days(10),
            Category::Income,
            2000.0,
            "Salary",
        )
        .unwrap();
        TransactionService::record(
            &mut session.ledger,
            today() - Duration::days(5),
            Category::Dining,
            150.0,
            "Dinner",
        )
        .unwrap();
        TransactionService::record(
            &mut session.ledger,
            today() - Duration::days(60),
            Category::Dining,
            999.0,
            "Old dinner",
        )
        .unwrap();
        TransactionService::record(
            &mut session.ledger,
            today() - Duration::days(4),
            Category::Transport,
            50.0,
            "Taxi",
        )
        .unwrap();
        session
    }

    #[test]
    fn dining_reply_covers_only_the_last_30_days() {
        let session = session_with_activity();
        let reply =
            AssistantService::respond(&session, "How much did I spend on dining last month?", today());
        assert!(reply.contains("€150.00"), "unexpected reply: {reply}");
    }

    #[test]
    fn savings_rate_reply_includes_the_benchmark() {
        let session = session_with_activity();
        let reply = AssistantService::respond(&session, "What's my savings rate?", today());
        assert!(reply.contains("40.1%") || reply.contains("40.0%"), "unexpected reply: {reply}");
        assert!(reply.contains("Great job"));
    }

    #[test]
    fn biggest_expense_reports_the_share() {
        let session = session_with_activity();
        let reply = AssistantService::respond(&session, "What's my biggest expense category?", today());
        assert!(reply.contains("Dining"));
        assert!(reply.contains("€1149.00"));
    }

    #[test]
    fn goal_query_reports_pacing() {
        let mut session = session_with_activity();
        session.goals.push(Goal::new(
            "Emergency Fund",
            1000.0,
            900.0,
            today() + Duration::days(30),
        ));
        let reply = AssistantService::respond(&session, "Am I on track for my goals?", today());
        assert!(reply.contains("Emergency Fund"), "unexpected reply: {reply}");
        assert!(reply.contains("Great news"));
    }

    #[test]
    fn spending_trends_compare_the_last_two_months() {
        let session = session_with_activity();
        let reply =
            AssistantService::respond(&session, "How is my spending trending?", today());
        assert!(reply.contains("rose in Transport"), "unexpected reply: {reply}");
        assert!(reply.contains("fell in Dining"), "unexpected reply: {reply}");
    }

    #[test]
    fn spending_trends_need_two_months_of_history() {
        let session = SessionContext::default();
        let reply = AssistantService::respond(&session, "show my spending trends", today());
        assert!(reply.contains("at least two months"), "unexpected reply: {reply}");
    }

    #[test]
    fn keywords_tolerate_small_typos() {
        let session = session_with_activity();
        let reply = AssistantService::respond(&session, "how to improve my budgte", today());
        assert!(reply.contains("50/30/20"), "unexpected reply: {reply}");
    }

    #[test]
    fn unmatched_queries_fall_back() {
        let session = session_with_activity();
        let reply = AssistantService::respond(&session, "tell me a joke", today());
        assert_eq!(reply, FALLBACK_REPLY);
    }
}
