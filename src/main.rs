use std::io::{stdout, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

#[cfg(test)]
mod testutil;

mod cmd;
mod config;
mod ledger;
mod money;
mod record;
mod store;
mod tracker;

#[derive(Debug, Parser)]
/// Records personal expenses in a CSV file and reports on them.
struct Command {
    #[command(flatten)]
    opts: config::LedgerOpts,
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Debug, Subcommand)]
enum SubCommand {
    #[command(name = "add")]
    /// Records a new expense.
    Add(cmd::add::Cmd),
    #[command(name = "remove")]
    /// Removes an expense by the number shown by `list`.
    Remove(cmd::remove::Cmd),
    #[command(name = "list")]
    /// Lists all expenses in the order they were added.
    List(cmd::list::Cmd),
    #[command(name = "total")]
    /// Shows the sum of all expenses.
    Total(cmd::total::Cmd),
}

fn main() -> Result<()> {
    env_logger::init();

    let cmd = Command::parse();
    let mut tracker = cmd.opts.open_tracker()?;
    debug!(
        "opened {:?} with {} expenses",
        tracker.ledger().path(),
        tracker.ledger().len()
    );
    let mut out = stdout().lock();

    use SubCommand::*;
    match &cmd.subcmd {
        Add(cmd) => cmd.run(&mut tracker, &mut out)?,
        Remove(cmd) => cmd.run(&mut tracker, &mut out)?,
        List(cmd) => cmd.run(&tracker, &mut out)?,
        Total(cmd) => cmd.run(&tracker, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
