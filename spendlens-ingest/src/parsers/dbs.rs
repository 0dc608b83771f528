//! DBS account statement parser (text)
//!
//! Expected reconstructed-text lines:
//!   Balance Brought Forward                                  1,000.00
//!   01/03/2024 BUS/MRT 480239122 SINGAPORE SG       1.68       998.32
//!   02/03/2024 FAST PAYMENT FROM: JOHN TAN         100.00     1,098.32
//!   PAYNOW MOBILE REF 2024030212345
//!
//! DBS rows carry no signed amount column, only the running balance, so
//! each record's withdrawal/deposit is reconciled from consecutive
//! balance readings.

use anyhow::Result;
use regex::Regex;

use spendlens_core::{Transaction, categorize};

/// Words that signal the end of a counterparty name when preceded by a space.
const NAME_STOP_WORDS: &[&str] = &[
    "TRANSFER", "PAYNOW", "MOBILE", "FOR", "TO", "OTHR", "OTHER", "REF", "UBP",
];

/// Known full names, longest first so a longer name is never shadowed by a
/// shorter one sharing a prefix.
const KNOWN_SENDERS: &[&str] = &[
    "DEEPAK S/O ALAGUSUBRAMANIAN",
    "DEEPANKUR JOHN NJONDIMACKAL",
    "SUBASH CHANDRA BOSE SWATI",
    "VARSHA RAMKUMAR",
    "APPANA JISHNU",
    "SINDHU MOHAN",
];

/// Marker patterns for one parse pass, compiled once up front.
struct Markers {
    balance_forward: Regex,
    date_anchor: Regex,
    amount: Regex,
    page_footer: Regex,
}

impl Markers {
    fn compile() -> Result<Self> {
        Ok(Self {
            balance_forward: Regex::new(
                r"Balance Brought Forward.*?(?:[A-Z]{3})?\s*(?P<amt>[\d,]+\.\d{2})",
            )?,
            date_anchor: Regex::new(r"^\d{2}/\d{2}/\d{4}")?,
            amount: Regex::new(r"[\d,]+\.\d{2}")?,
            page_footer: Regex::new(r"Page \d+ of \d+")?,
        })
    }

    /// True for any line that ends continuation scanning for the record
    /// under construction. The terminator line itself is not consumed.
    fn is_terminator(&self, line: &str) -> bool {
        line.is_empty()
            || self.date_anchor.is_match(line)
            || self.balance_forward.is_match(line)
            || line.contains("Balance Carried Forward")
            || line.contains("Total Balance Carried Forward")
            || line.contains("Transaction Details as of")
            || self.page_footer.is_match(line)
    }
}

/// Running account balance for one parse pass, seeded from the first
/// brought-forward marker and advanced as records are emitted.
struct BalanceTracker {
    current: f64,
}

impl BalanceTracker {
    fn new() -> Self {
        Self { current: 0.0 }
    }

    fn observe_brought_forward(&mut self, amount: f64) {
        self.current = amount;
    }

    /// Split the delta against the tracked balance into a withdrawal or a
    /// deposit, then advance the tracked balance. The delta is rounded to
    /// two decimals to absorb float drift across sequential subtractions.
    fn reconcile(&mut self, new_balance: f64) -> (f64, f64) {
        let diff = ((new_balance - self.current) * 100.0).round() / 100.0;
        self.current = new_balance;
        if diff < 0.0 { (-diff, 0.0) } else { (0.0, diff) }
    }
}

enum State {
    Scanning,
    InRecord {
        date: String,
        description: String,
        balance: f64,
    },
}

/// Parse reconstructed statement lines into transactions.
///
/// An input with no transaction rows yields an empty list, not an error.
pub fn parse_dbs_statement(lines: &[String]) -> Result<Vec<Transaction>> {
    let markers = Markers::compile()?;
    let mut tracker = BalanceTracker::new();
    let mut out = Vec::new();

    let mut state = State::Scanning;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        state = match state {
            State::Scanning => {
                if let Some(caps) = markers.balance_forward.captures(line) {
                    if let Some(amount) = parse_amount(&caps["amt"]) {
                        tracker.observe_brought_forward(amount);
                    }
                    i += 1;
                    State::Scanning
                } else if let Some(date) = markers.date_anchor.find(line) {
                    let rest = line[date.end()..].trim();
                    i += 1;
                    // A date with no amount tokens is not a transaction row.
                    begin_record(&markers, date.as_str(), rest).unwrap_or(State::Scanning)
                } else {
                    i += 1;
                    State::Scanning
                }
            }

            State::InRecord {
                date,
                mut description,
                balance,
            } => {
                if markers.is_terminator(line) {
                    // Leave i untouched: scanning resumes at the terminator.
                    out.push(finish_record(&mut tracker, date, description, balance));
                    State::Scanning
                } else {
                    description.push(' ');
                    description.push_str(line);
                    i += 1;
                    State::InRecord {
                        date,
                        description,
                        balance,
                    }
                }
            }
        };
    }

    // End of input terminates any record still under construction.
    if let State::InRecord {
        date,
        description,
        balance,
    } = state
    {
        out.push(finish_record(&mut tracker, date, description, balance));
    }

    Ok(out)
}

/// Convenience entry point for statement text that already has line breaks.
pub fn parse_dbs_text(text: &str) -> Result<Vec<Transaction>> {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    parse_dbs_statement(&lines)
}

/// Start a record from an anchor line: the last amount token is the new
/// running balance, everything before the first one is the description.
fn begin_record(markers: &Markers, date: &str, rest: &str) -> Option<State> {
    let amounts: Vec<_> = markers.amount.find_iter(rest).collect();
    let first = amounts.first()?;
    let balance = parse_amount(amounts.last()?.as_str())?;

    Some(State::InRecord {
        date: date.to_string(),
        description: rest[..first.start()].trim().to_string(),
        balance,
    })
}

fn finish_record(
    tracker: &mut BalanceTracker,
    date: String,
    description: String,
    balance: f64,
) -> Transaction {
    let (withdrawal, deposit) = tracker.reconcile(balance);
    let sender = if deposit > 0.0 {
        extract_sender(&description)
    } else {
        None
    };
    let category = categorize(&description);

    Transaction {
        date,
        description,
        withdrawal,
        deposit,
        balance,
        category,
        sender,
    }
}

/// Parse a statement amount token, stripping comma thousands separators.
fn parse_amount(s: &str) -> Option<f64> {
    s.replace(',', "").parse().ok()
}

/// Heuristically isolate the counterparty name from an inbound transfer
/// description. Returns None when the description has no `FROM:` marker.
fn extract_sender(description: &str) -> Option<String> {
    let (_, after) = description.split_once("FROM:")?;
    let from_part = after.trim();

    if let Some(name) = KNOWN_SENDERS.iter().find(|n| from_part.starts_with(*n)) {
        return Some((*name).to_string());
    }

    // Cut at the earliest of a literal hyphen or a space-preceded stop word.
    let mut end = from_part.len();
    if let Some(idx) = from_part.find('-') {
        end = end.min(idx);
    }
    for word in NAME_STOP_WORDS {
        if let Some(idx) = from_part.find(&format!(" {word}")) {
            end = end.min(idx);
        }
    }

    Some(from_part[..end].trim().to_string())
}
