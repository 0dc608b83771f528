//! Aggregates parsed transactions into per-month spending summaries.

use crate::transaction::{Category, Transaction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals for one calendar month of statement activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    /// `YYYY-MM`, or `"Unknown"` for records whose date did not parse.
    pub month: String,
    pub total_expenditure: f64,
    pub total_income: f64,
    pub net_flow: f64,
    pub transactions: Vec<Transaction>,
    /// Expenditure per category; deposits are not counted here.
    pub category_breakdown: BTreeMap<Category, f64>,
}

impl MonthlySummary {
    fn new(month: String) -> Self {
        Self {
            month,
            total_expenditure: 0.0,
            total_income: 0.0,
            net_flow: 0.0,
            transactions: Vec::new(),
            category_breakdown: BTreeMap::new(),
        }
    }
}

/// Group transactions by month and total the flows.
///
/// Summaries come back sorted ascending by month key, so multi-statement
/// inputs line up chronologically regardless of file order.
pub fn analyze(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<String, MonthlySummary> = BTreeMap::new();

    for txn in transactions {
        let key = txn.month_key();
        let summary = by_month
            .entry(key.clone())
            .or_insert_with(|| MonthlySummary::new(key));

        summary.transactions.push(txn.clone());
        summary.total_expenditure += txn.withdrawal;
        summary.total_income += txn.deposit;
        summary.net_flow += txn.signed_amount();

        if txn.is_withdrawal() {
            *summary.category_breakdown.entry(txn.category).or_insert(0.0) += txn.withdrawal;
        }
    }

    by_month.into_values().collect()
}
