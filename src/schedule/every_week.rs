use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::ForecastError;
use crate::schedule::interface::{iso_weekday, Recurrence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EveryWeek {
    weekday: Weekday,
}

impl Default for EveryWeek {
    fn default() -> Self {
        EveryWeek {
            weekday: Weekday::Mon,
        }
    }
}

impl EveryWeek {
    /// `weekday` uses ISO numbering, 1 for Monday to 7 for Sunday.
    pub fn new(weekday: u32) -> Result<EveryWeek, ForecastError> {
        Ok(EveryWeek {
            weekday: iso_weekday(weekday)?,
        })
    }

    #[cfg(test)]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl Recurrence for EveryWeek {
    fn period_length(&self) -> u32 {
        7
    }

    fn matches_date(&self, date: &NaiveDate) -> bool {
        date.weekday() == self.weekday
    }
}
