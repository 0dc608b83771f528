//! spendlens-core: transaction types, category rules, and monthly spending analysis.

pub mod analyzer;
pub mod categorizer;
pub mod transaction;

pub use analyzer::{MonthlySummary, analyze};
pub use categorizer::categorize;
pub use transaction::{Category, Transaction};
