use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::ledger::{Ledger, DEFAULT_FILENAME};
use crate::store::LoadMode;
use crate::tracker::ExpenseTracker;

/// Options that pick and open the backing file, shared by every subcommand.
#[derive(Debug, Args)]
pub struct LedgerOpts {
    /// The CSV file holding the expenses. Created on the first change if it
    /// does not exist.
    #[arg(
        short = 'f',
        long = "file",
        env = "EXPENSES_FILE",
        default_value = DEFAULT_FILENAME,
        global = true
    )]
    pub file: PathBuf,
    /// Fail on a malformed file instead of skipping bad lines.
    #[arg(long = "strict", global = true)]
    pub strict: bool,
}

impl LedgerOpts {
    pub fn load_mode(&self) -> LoadMode {
        if self.strict {
            LoadMode::Strict
        } else {
            LoadMode::Lenient
        }
    }

    pub fn open_tracker(&self) -> Result<ExpenseTracker> {
        let ledger = Ledger::open(&self.file, self.load_mode())?;
        Ok(ExpenseTracker::new(ledger))
    }
}
