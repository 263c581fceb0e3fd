use rust_decimal::Decimal;

pub type Figure = Decimal;

/// Which way money moves for a change. The sign of a change's amount is derived
/// from it once, when the change is built.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Gain,
    Dump,
}

impl Direction {
    pub fn signed(&self, amount: Figure) -> Figure {
        match self {
            Direction::Gain => amount.abs(),
            Direction::Dump => -amount.abs(),
        }
    }

    pub fn of(amount: &Figure) -> Option<Direction> {
        if amount.is_sign_positive() && !amount.is_zero() {
            Some(Direction::Gain)
        } else if amount.is_sign_negative() && !amount.is_zero() {
            Some(Direction::Dump)
        } else {
            None
        }
    }
}
