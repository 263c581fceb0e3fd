use chrono::{Datelike, NaiveDate};

use crate::errors::ForecastError;
use crate::schedule::interface::Recurrence;

// February is kept at 28 days, so the 29th can never be picked as a yearly date.
const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EveryYear {
    month: u32,
    day: u32,
}

impl EveryYear {
    pub fn new(month: u32, day: u32) -> Result<EveryYear, ForecastError> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::invalid_argument(format!(
                "invalid month in year: {}",
                month
            )));
        }
        if !(1..=DAYS_PER_MONTH[month as usize]).contains(&day) {
            return Err(ForecastError::invalid_argument(format!(
                "invalid day in month {}: {}",
                month, day
            )));
        }
        Ok(EveryYear { month, day })
    }
}

impl Recurrence for EveryYear {
    // TODO Decide whether leap years should count 366 days; daily averages depend on it
    fn period_length(&self) -> u32 {
        365
    }

    fn matches_date(&self, date: &NaiveDate) -> bool {
        (date.month(), date.day()) == (self.month, self.day)
    }
}
