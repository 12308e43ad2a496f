use std::fmt;

/// A balanced two-posting transaction, ready to be appended to a journal.
///
/// All fields are kept as the user entered them. The amount is not parsed; the
/// `from_account` posting negates it by prefixing `-`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    date: String,
    description: String,
    to_account: String,
    from_account: String,
    amount: String,
}

impl Entry {
    pub fn new<S: Into<String>>(
        date: S,
        description: S,
        to_account: S,
        from_account: S,
        amount: S,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            to_account: to_account.into(),
            from_account: from_account.into(),
            amount: amount.into(),
        }
    }

    /// The postings as (account, amount) pairs, in the order they are written.
    pub fn postings(&self) -> [(&str, String); 2] {
        [
            (self.to_account.as_str(), self.amount.clone()),
            (self.from_account.as_str(), negate(&self.amount)),
        ]
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        writeln!(f, "{} {}", self.date, self.description)?;
        for (account, amount) in &self.postings() {
            writeln!(f, "\t{}\t\t{}", account, amount)?;
        }
        Ok(())
    }
}

/// Formats the journal text for a transaction moving `amount` from
/// `from_account` to `to_account`.
pub fn format_entry(
    date: &str,
    description: &str,
    to_account: &str,
    from_account: &str,
    amount: &str,
) -> String {
    Entry::new(date, description, to_account, from_account, amount).to_string()
}

// Textual, so "-$5" becomes "--$5".
fn negate(amount: &str) -> String {
    format!("-{}", amount)
}
