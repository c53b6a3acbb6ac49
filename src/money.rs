use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// Displays an amount as dollars with two decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dollars(pub Decimal);

impl Dollars {
    pub fn cents(&self) -> Decimal {
        let mut v = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        v.rescale(2);
        v
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "${}", self.cents())
    }
}
