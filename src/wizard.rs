//! Walks the user through creating a new entry and appends it to the journal.

use thiserror::Error;
use tracing::{debug, info};

use crate::accounts;
use crate::entry;
use crate::journal::{Journal, ReadError, WriteError};
use crate::prompt::{self, InputError, Prompter};
use crate::select::{AccountSelector, SubprocessError};

const TO_ACCOUNT_LABEL: &str = "To account";
const FROM_ACCOUNT_LABEL: &str = "From account";

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error("selecting account: {0}")]
    Subprocess(#[from] SubprocessError),
    #[error("prompting for input: {0}")]
    Input(#[from] InputError),
}

pub struct Wizard<'a> {
    prompter: &'a dyn Prompter,
    selector: &'a dyn AccountSelector,
}

impl<'a> Wizard<'a> {
    pub fn new(prompter: &'a dyn Prompter, selector: &'a dyn AccountSelector) -> Self {
        Self { prompter, selector }
    }

    /// Asks for each part of the entry, then appends it to `journal` and
    /// returns the text written. Nothing is written if any step fails.
    pub fn run(&self, journal: &Journal) -> Result<String, WizardError> {
        let accounts = accounts::read_accounts(journal)?;

        let today = prompt::today();
        let date = self.prompter.input(prompt::DATE_LABEL, Some(&today))?;
        let description = self.prompter.input(prompt::DESCRIPTION_LABEL, None)?;
        let to_account = self.selector.select(TO_ACCOUNT_LABEL, &accounts)?;
        let from_account = self.selector.select(FROM_ACCOUNT_LABEL, &accounts)?;
        let amount = self
            .prompter
            .input(prompt::AMOUNT_LABEL, Some(prompt::DEFAULT_AMOUNT))?;
        debug!(%to_account, %from_account, %amount, "collected entry");

        let text = entry::format_entry(&date, &description, &to_account, &from_account, &amount);
        journal.append(&text)?;
        info!(%journal, "appended entry");

        Ok(text)
    }
}
