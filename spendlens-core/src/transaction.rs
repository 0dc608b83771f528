//! Transaction record and category types shared across the workspace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One statement entry, reconciled against the running balance.
///
/// Exactly one of `withdrawal`/`deposit` is nonzero; both are
/// non-negative. `balance` is the account balance immediately after
/// this entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Date as printed on the statement (DD/MM/YYYY), kept verbatim for display.
    pub date: String,
    /// Free-text description, possibly joined from several statement lines.
    pub description: String,
    pub withdrawal: f64,
    pub deposit: f64,
    pub balance: f64,
    pub category: Category,
    /// Counterparty name for inbound transfers, when one could be extracted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

impl Transaction {
    pub fn is_withdrawal(&self) -> bool {
        self.withdrawal > 0.0
    }

    pub fn is_deposit(&self) -> bool {
        self.deposit > 0.0
    }

    /// Signed flow: deposits positive, withdrawals negative.
    pub fn signed_amount(&self) -> f64 {
        self.deposit - self.withdrawal
    }

    /// `YYYY-MM` grouping key derived from the statement date.
    /// Returns `"Unknown"` when the date string does not parse.
    pub fn month_key(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%d/%m/%Y") {
            Ok(d) => d.format("%Y-%m").to_string(),
            Err(_) => "Unknown".to_string(),
        }
    }
}

/// Spending categories matched by the ordered keyword rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "public-transport")]
    PublicTransport,
    #[serde(rename = "other-transport")]
    OtherTransport,
    #[serde(rename = "subscriptions")]
    Subscriptions,
    #[serde(rename = "games")]
    Games,
    #[serde(rename = "groceries")]
    Groceries,
    #[serde(rename = "food-dining")]
    FoodAndDining,
    #[serde(rename = "overseas")]
    OverseasExpenditure,
    #[serde(rename = "transfers")]
    Transfers,
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "uncategorized")]
    Uncategorized,
}

impl Category {
    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::PublicTransport => "Public Transport",
            Category::OtherTransport => "Other Transport",
            Category::Subscriptions => "Subscriptions",
            Category::Games => "Games",
            Category::Groceries => "Groceries",
            Category::FoodAndDining => "Food & Dining",
            Category::OverseasExpenditure => "Overseas Expenditure",
            Category::Transfers => "Transfers",
            Category::Income => "Income",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
