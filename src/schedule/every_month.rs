use chrono::{Datelike, NaiveDate};

use crate::errors::ForecastError;
use crate::schedule::interface::Recurrence;

/// Something that happens every month on the same day. Days after the 28th are
/// refused so that every month has a firing day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EveryMonth {
    firing_day: u32,
}

impl Default for EveryMonth {
    fn default() -> Self {
        EveryMonth { firing_day: 1 }
    }
}

impl EveryMonth {
    pub fn new(firing_day: u32) -> Result<EveryMonth, ForecastError> {
        if !(1..=28).contains(&firing_day) {
            return Err(ForecastError::invalid_argument(format!(
                "firing day must be in the range [1..28], got {}",
                firing_day
            )));
        }
        Ok(EveryMonth { firing_day })
    }

    #[cfg(test)]
    pub fn firing_day(&self) -> u32 {
        self.firing_day
    }
}

impl Recurrence for EveryMonth {
    fn period_length(&self) -> u32 {
        30
    }

    fn matches_date(&self, date: &NaiveDate) -> bool {
        date.day() == self.firing_day
    }
}
