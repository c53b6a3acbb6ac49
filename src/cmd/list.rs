use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::money::Dollars;
use crate::tracker::{ExpenseTracker, Listing};

#[derive(Debug, Args)]
pub struct Cmd {}

impl Cmd {
    pub fn run(&self, tracker: &ExpenseTracker, out: &mut dyn Write) -> Result<()> {
        let listings = tracker.list_expenses();
        if listings.is_empty() {
            writeln!(out, "No expenses recorded.")?;
        }
        for listing in &listings {
            writeln!(out, "{}", format_listing(listing))?;
        }
        Ok(())
    }
}

/// Formats a listing line, numbered from 1 for display.
pub fn format_listing(listing: &Listing) -> String {
    format!(
        "{}. {} | {} | {}",
        listing.position + 1,
        listing.record.date_string(),
        listing.record.description(),
        Dollars(listing.record.amount())
    )
}
