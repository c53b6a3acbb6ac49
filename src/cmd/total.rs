use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::money::Dollars;
use crate::tracker::ExpenseTracker;

#[derive(Debug, Args)]
pub struct Cmd {}

impl Cmd {
    pub fn run(&self, tracker: &ExpenseTracker, out: &mut dyn Write) -> Result<()> {
        let total = tracker.total()?;
        writeln!(out, "Total Expenses: {}", Dollars(total))?;
        Ok(())
    }
}
