use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use crate::ledger::Ledger;
use crate::record::DATE_FORMAT;
use crate::store::LoadMode;
use crate::tracker::ExpenseTracker;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, DATE_FORMAT).expect("test date did not parse")
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("test amount did not parse")
}

/// Dedents an inline CSV fixture and drops the leading newline.
pub fn csv_fixture(s: &str) -> String {
    textwrap::dedent(s).trim_start_matches('\n').to_string()
}

/// Parses command line arguments for a single subcommand.
pub fn parse_args<T: clap::Args>(args: &[&str]) -> T {
    let cmd = T::augment_args(clap::Command::new("test"));
    let matches = cmd
        .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
        .expect("test arguments did not parse");
    T::from_arg_matches(&matches).expect("test arguments did not convert")
}

/// A tracker backed by a file in a temporary directory that is removed on
/// drop.
pub struct TempTracker {
    pub tracker: ExpenseTracker,
    _dir: TempDir,
}

impl TempTracker {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let ledger =
            Ledger::open(dir.path().join("expenses.csv"), LoadMode::Strict).expect("open");
        TempTracker {
            tracker: ExpenseTracker::new(ledger),
            _dir: dir,
        }
    }
}
