use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Format of dates in the backing file and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an amount written with a `.` separator, also accepting exponent
/// forms such as `1e+16` or `1.5e-05`.
pub fn parse_amount(s: &str) -> Result<Decimal, rust_decimal::Error> {
    if s.contains(['e', 'E']) {
        Decimal::from_scientific(s)
    } else {
        Decimal::from_str(s)
    }
}

/// One expense entry. Never modified once built; an edit is a removal
/// followed by an addition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    date: NaiveDate,
    description: String,
    amount: Decimal,
}

impl Record {
    pub fn new<S: Into<String>>(date: NaiveDate, description: S, amount: Decimal) -> Self {
        Record {
            date,
            description: description.into(),
            amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The date as written to the backing file.
    pub fn date_string(&self) -> String {
        self.date().format(DATE_FORMAT).to_string()
    }
}
