//! Free-form text prompts for the fields of a new entry.

use std::io;

use chrono::Local;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use thiserror::Error;

pub const DATE_LABEL: &str = "Date (YYYY/MM/DD)";
pub const DESCRIPTION_LABEL: &str = "Description";
pub const AMOUNT_LABEL: &str = "Amount";

/// Placeholder offered when asking for the amount.
pub const DEFAULT_AMOUNT: &str = "€10";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("reading from terminal: {0}")]
    Terminal(#[from] dialoguer::Error),
    #[error("prompt interrupted")]
    Interrupted,
}

pub trait Prompter {
    /// Asks for a line of text. `default` is offered pre-filled and returned if
    /// the user enters nothing.
    fn input(&self, label: &str, default: Option<&str>) -> Result<String, InputError>;
}

/// The date prompt's default: today in the local timezone.
pub fn today() -> String {
    Local::now().format("%Y/%m/%d").to_string()
}

/// Prompts on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn input(&self, label: &str, default: Option<&str>) -> Result<String, InputError> {
        let mut input = Input::<String>::with_theme(&self.theme);
        input = input.with_prompt(label).allow_empty(default.is_none());
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|err| match err {
            dialoguer::Error::IO(ref e) if e.kind() == io::ErrorKind::Interrupted => {
                InputError::Interrupted
            }
            err => InputError::Terminal(err),
        })
    }
}
