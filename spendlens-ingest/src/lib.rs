//! spendlens-ingest: statement ingestion — row reconstruction from positioned
//! PDF text fragments and bank-specific line parsers.

pub mod layout;
pub mod parsers;
pub mod types;

pub use layout::{assemble_lines, reconstruct_page_lines};
pub use parsers::dbs::{parse_dbs_statement, parse_dbs_text};
pub use types::{Page, TextFragment};
