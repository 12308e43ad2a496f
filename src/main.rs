use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
mod testutil;

mod accounts;
mod entry;
mod journal;
mod prompt;
mod select;
mod wizard;

use crate::journal::Journal;
use crate::prompt::TerminalPrompter;
use crate::select::Fzf;
use crate::wizard::Wizard;

#[derive(Debug, Parser)]
#[command(version)]
/// A wizard for adding a new entry to a Ledger journal.
///
/// Accounts are chosen with fzf from those already used in the journal.
struct Command {
    /// The Ledger journal to append to. It must already exist.
    #[arg(default_value = journal::DEFAULT_PATH)]
    journal: Journal,
}

impl Command {
    fn run(&self) -> Result<()> {
        let prompter = TerminalPrompter::default();
        Wizard::new(&prompter, &Fzf).run(&self.journal)?;
        println!("Ledger entry added successfully.");
        Ok(())
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    Command::parse().run()
}
