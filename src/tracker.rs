//! The operations offered to the user interface, with the input validation
//! that has to happen before the ledger is touched.

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::Ledger;
use crate::record::{parse_amount, Record, DATE_FORMAT};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("all fields are required, {0} is empty")]
    MissingField(&'static str),
    #[error("invalid amount format: {0:?}")]
    InvalidAmount(String),
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl TrackerError {
    /// True if the input was rejected before reaching the ledger.
    pub fn is_validation(&self) -> bool {
        !matches!(self, TrackerError::Storage(_))
    }
}

/// Result of `ExpenseTracker::remove_expense`.
#[derive(Debug, PartialEq, Eq)]
pub enum Removal {
    Removed(Record),
    NoOp,
}

/// One line of `ExpenseTracker::list_expenses`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Zero-based position in the ledger, valid until the next change.
    pub position: usize,
    pub record: Record,
}

pub struct ExpenseTracker {
    ledger: Ledger,
}

impl ExpenseTracker {
    pub fn new(ledger: Ledger) -> Self {
        ExpenseTracker { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validates raw user input and records it as a new expense.
    pub fn add_expense(
        &mut self,
        date: &str,
        description: &str,
        amount: &str,
    ) -> Result<Record, TrackerError> {
        let record = parse_expense(date, description, amount)?;
        self.ledger.add(record.clone())?;
        info!(
            "added expense {} {:?} {}",
            record.date_string(),
            record.description(),
            record.amount()
        );
        Ok(record)
    }

    /// Removes the expense at `position`, as found in the most recent
    /// `list_expenses`. Positions outside the ledger, negative ones included,
    /// do nothing.
    pub fn remove_expense(&mut self, position: i64) -> Result<Removal, TrackerError> {
        let index = match usize::try_from(position) {
            Ok(index) => index,
            Err(_) => return Ok(Removal::NoOp),
        };
        Ok(match self.ledger.remove(index)? {
            Some(record) => {
                info!("removed expense at position {}", index);
                Removal::Removed(record)
            }
            None => Removal::NoOp,
        })
    }

    pub fn list_expenses(&self) -> Vec<Listing> {
        self.ledger
            .records()
            .iter()
            .enumerate()
            .map(|(position, record)| Listing {
                position,
                record: record.clone(),
            })
            .collect()
    }

    pub fn total(&self) -> Result<Decimal, TrackerError> {
        Ok(self.ledger.total()?)
    }
}

/// Builds a record from user input, trimming surrounding whitespace.
pub fn parse_expense(date: &str, description: &str, amount: &str) -> Result<Record, TrackerError> {
    let date = date.trim();
    let description = description.trim();
    let amount = amount.trim();

    if date.is_empty() {
        return Err(TrackerError::MissingField("date"));
    }
    if description.is_empty() {
        return Err(TrackerError::MissingField("description"));
    }
    if amount.is_empty() {
        return Err(TrackerError::MissingField("amount"));
    }

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| TrackerError::InvalidDate(date.to_string()))?;
    let amount =
        parse_amount(amount).map_err(|_| TrackerError::InvalidAmount(amount.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(TrackerError::NegativeAmount(amount));
    }

    Ok(Record::new(date, description, amount))
}
