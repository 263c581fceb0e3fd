use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::amounts::Figure;

pub const PERIOD_BEGIN: &str = "PERIOD-BEGIN";
pub const PERIOD_END: &str = "PERIOD-END";

/// A concrete movement of money on a given date. A `Change` only describes money
/// coming in or going out following a schedule; a `Transfer` is one realization of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub date: NaiveDate,
    pub reason: String,
    pub amount: Figure,
}

impl Transfer {
    pub fn new(date: NaiveDate, reason: impl Into<String>, amount: Figure) -> Transfer {
        Transfer {
            date,
            reason: reason.into(),
            amount,
        }
    }

    pub fn period_begin(date: NaiveDate) -> Transfer {
        Transfer::new(date, PERIOD_BEGIN, Figure::ZERO)
    }

    pub fn period_end(date: NaiveDate) -> Transfer {
        Transfer::new(date, PERIOD_END, Figure::ZERO)
    }

    /// Whether `second` falls in a later calendar month than `first`, the two being in order.
    pub fn leaps_month(first: &Transfer, second: &Transfer) -> bool {
        if first.date > second.date {
            return false;
        }
        (first.date.year(), first.date.month()) < (second.date.year(), second.date.month())
    }

    /// Date first, reason to break ties between transfers of the same day.
    pub fn chronological(first: &Transfer, second: &Transfer) -> Ordering {
        first
            .date
            .cmp(&second.date)
            .then_with(|| first.reason.cmp(&second.reason))
    }
}

impl Display for Transfer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transfer({},{},{})", self.date, self.reason, self.amount)
    }
}
