use std::io::Write;

use anyhow::Result;
use chrono::Local;
use clap::Args;

use crate::record::DATE_FORMAT;
use crate::tracker::ExpenseTracker;

#[derive(Debug, Args)]
pub struct Cmd {
    /// Date of the expense, as YYYY-MM-DD. Defaults to today.
    #[arg(short = 'd', long = "date")]
    date: Option<String>,
    /// What the money was spent on.
    description: String,
    /// How much was spent, e.g. 4.50.
    #[arg(allow_negative_numbers = true)]
    amount: String,
}

impl Cmd {
    pub fn run(&self, tracker: &mut ExpenseTracker, out: &mut dyn Write) -> Result<()> {
        let date = match &self.date {
            Some(date) => date.clone(),
            None => Local::now().date_naive().format(DATE_FORMAT).to_string(),
        };
        tracker.add_expense(&date, &self.description, &self.amount)?;
        writeln!(out, "Expense added successfully!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{dec, parse_args, TempTracker};

    #[test]
    fn adds_expense() {
        let mut t = TempTracker::new();
        let cmd: Cmd = parse_args(&["--date", "2024-01-15", "Coffee", "4.50"]);
        let mut out = Vec::new();
        cmd.run(&mut t.tracker, &mut out).expect("run");

        assert_eq!("Expense added successfully!\n", String::from_utf8(out).expect("utf-8"));
        assert_eq!(dec("4.50"), t.tracker.total().expect("total"));
        assert_eq!(
            "2024-01-15",
            t.tracker.list_expenses()[0].record.date_string()
        );
    }

    #[test]
    fn date_defaults_to_today() {
        let mut t = TempTracker::new();
        let cmd: Cmd = parse_args(&["Coffee", "4.50"]);
        cmd.run(&mut t.tracker, &mut Vec::<u8>::new()).expect("run");
        let today = Local::now().date_naive();
        let got = t.tracker.list_expenses()[0].record.date();
        // Allow for the test running across midnight.
        assert!(got == today || got.succ_opt() == Some(today), "{}", got);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut t = TempTracker::new();
        let cmd: Cmd = parse_args(&["--date", "2024-01-15", "Coffee", "-4.50"]);
        let err = cmd
            .run(&mut t.tracker, &mut Vec::<u8>::new())
            .expect_err("should fail");
        assert!(err.to_string().contains("must not be negative"), "{}", err);
        assert!(t.tracker.list_expenses().is_empty());
    }
}
