//! Aggregation helpers over a ledger snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{Category, Ledger, Period, TransactionKind};
use crate::services::ServiceResult;

/// One row of the monthly income-vs-expense pivot.
///
/// `expense` keeps the stored (negative) sign, so `net = income + expense`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyCashflow {
    pub period: Period,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Pure aggregation over the current ledger snapshot; no stored state.
///
/// Every function recomputes from scratch, so repeated calls over an
/// unchanged ledger return identical results.
pub struct SummaryService;

impl SummaryService {
    /// Category → sum of absolute amounts for transactions of `kind`.
    ///
    /// The map iterates in the categories' declaration order, which keeps
    /// breakdowns stable between calls.
    pub fn by_category(ledger: &Ledger, kind: TransactionKind) -> BTreeMap<Category, f64> {
        let mut totals = BTreeMap::new();
        for transaction in ledger.all().iter().filter(|t| t.kind == kind) {
            *totals.entry(transaction.category).or_insert(0.0) += transaction.magnitude();
        }
        totals
    }

    /// Year-month → signed sum for transactions of `kind`.
    ///
    /// Months without a transaction of that kind are absent, never
    /// zero-filled; chart and forecast consumers must fill gaps themselves
    /// if they need a dense series.
    pub fn by_month(ledger: &Ledger, kind: TransactionKind) -> BTreeMap<Period, f64> {
        let mut totals = BTreeMap::new();
        for transaction in ledger.all().iter().filter(|t| t.kind == kind) {
            *totals
                .entry(Period::from_date(transaction.date))
                .or_insert(0.0) += transaction.amount;
        }
        totals
    }

    /// (period, category) → expense-style magnitude for transactions of `kind`.
    pub fn by_month_category(
        ledger: &Ledger,
        kind: TransactionKind,
    ) -> BTreeMap<(Period, Category), f64> {
        let mut totals = BTreeMap::new();
        for transaction in ledger.all().iter().filter(|t| t.kind == kind) {
            *totals
                .entry((Period::from_date(transaction.date), transaction.category))
                .or_insert(0.0) += transaction.magnitude();
        }
        totals
    }

    /// Chronologically ordered income/expense/net rows, one per month that
    /// has any activity.
    pub fn monthly_cashflow(ledger: &Ledger) -> Vec<MonthlyCashflow> {
        let mut rows: BTreeMap<Period, (f64, f64)> = BTreeMap::new();
        for transaction in ledger.all() {
            let entry = rows
                .entry(Period::from_date(transaction.date))
                .or_insert((0.0, 0.0));
            match transaction.kind {
                TransactionKind::Income => entry.0 += transaction.amount,
                TransactionKind::Expense => entry.1 += transaction.amount,
            }
        }
        rows.into_iter()
            .map(|(period, (income, expense))| MonthlyCashflow {
                period,
                income,
                expense,
                net: income + expense,
            })
            .collect()
    }

    /// The category with the largest summed magnitude for `kind`.
    pub fn top_category(
        ledger: &Ledger,
        kind: TransactionKind,
    ) -> ServiceResult<(Category, f64)> {
        Self::by_category(ledger, kind)
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| {
                LedgerError::EmptyData(format!("no {} transactions recorded", kind.as_str()))
                    .into()
            })
    }

    /// Percentage of income kept after expenses; absent when there is no
    /// income to divide by.
    pub fn savings_rate(income_total: f64, expense_total: f64) -> Option<f64> {
        if income_total > 0.0 {
            Some((income_total - expense_total) / income_total * 100.0)
        } else {
            None
        }
    }

    /// Total income magnitude and total expense magnitude over the ledger.
    pub fn totals(ledger: &Ledger) -> (f64, f64) {
        let mut income = 0.0;
        let mut expense = 0.0;
        for transaction in ledger.all() {
            match transaction.kind {
                TransactionKind::Income => income += transaction.magnitude(),
                TransactionKind::Expense => expense += transaction.magnitude(),
            }
        }
        (income, expense)
    }

    /// Expense magnitude for one category on or after `since`.
    pub fn spent_in_category_since(ledger: &Ledger, category: Category, since: NaiveDate) -> f64 {
        ledger
            .all()
            .iter()
            .filter(|t| {
                t.kind == TransactionKind::Expense && t.category == category && t.date >= since
            })
            .map(|t| t.magnitude())
            .sum()
    }
}
