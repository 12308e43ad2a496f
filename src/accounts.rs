//! Recovers the account names already used in a Ledger journal.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::journal::{Journal, ReadError};

lazy_static! {
    /// A posting line starts with an account token followed by at least two
    /// whitespace characters before the amount.
    static ref POSTING_RX: Regex = Regex::new(r"^\s*([\w:]+)\s{2,}").unwrap();
}

/// Returns the distinct account names in `ledger_text`, in the order that they
/// first appear.
pub fn extract_accounts(ledger_text: &str) -> Vec<String> {
    ledger_text
        .lines()
        .filter_map(posting_account)
        .unique()
        .map(str::to_string)
        .collect()
}

/// Reads the journal and returns the accounts used in it.
pub fn read_accounts(journal: &Journal) -> Result<Vec<String>, ReadError> {
    let accounts = extract_accounts(&journal.read()?);
    tracing::debug!(count = accounts.len(), %journal, "extracted accounts");
    Ok(accounts)
}

fn posting_account(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    POSTING_RX
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}
