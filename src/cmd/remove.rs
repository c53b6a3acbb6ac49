use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::cmd::list::format_listing;
use crate::tracker::{ExpenseTracker, Listing, Removal};

#[derive(Debug, Args)]
pub struct Cmd {
    /// The number of the expense as shown by `list`.
    #[arg(allow_negative_numbers = true)]
    number: i64,
}

impl Cmd {
    pub fn run(&self, tracker: &mut ExpenseTracker, out: &mut dyn Write) -> Result<()> {
        // Numbers shown by `list` start at 1. The tracker was loaded for this
        // invocation, so the position is current.
        let position = self.number.saturating_sub(1);
        match tracker.remove_expense(position)? {
            Removal::Removed(record) => {
                let shown = format_listing(&Listing {
                    position: position as usize,
                    record,
                });
                writeln!(out, "Removed {}", shown)?;
                writeln!(out, "Expense removed successfully!")?;
            }
            Removal::NoOp => {
                writeln!(
                    out,
                    "No expense numbered {}, nothing removed.",
                    self.number
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::testutil::{dec, parse_args, TempTracker};

    fn tracker_with_two() -> TempTracker {
        let mut t = TempTracker::new();
        t.tracker.add_expense("2024-01-15", "Coffee", "4.50").expect("add");
        t.tracker.add_expense("2024-01-16", "Lunch", "12.00").expect("add");
        t
    }

    #[test]
    fn removes_displayed_number() {
        let mut t = tracker_with_two();
        let cmd: Cmd = parse_args(&["1"]);
        let mut out = Vec::new();
        cmd.run(&mut t.tracker, &mut out).expect("run");
        assert_eq!(
            "Removed 1. 2024-01-15 | Coffee | $4.50\nExpense removed successfully!\n",
            String::from_utf8(out).expect("utf-8")
        );
        assert_eq!(dec("12.00"), t.tracker.total().expect("total"));
    }

    #[test_case("0" ; "zero")]
    #[test_case("3" ; "past end")]
    #[test_case("-2" ; "negative")]
    fn out_of_range_is_noop(number: &str) {
        let mut t = tracker_with_two();
        let cmd: Cmd = parse_args(&[number]);
        let mut out = Vec::new();
        cmd.run(&mut t.tracker, &mut out).expect("run");
        assert_eq!(
            format!("No expense numbered {}, nothing removed.\n", number),
            String::from_utf8(out).expect("utf-8")
        );
        assert_eq!(2, t.tracker.list_expenses().len());
    }
}
