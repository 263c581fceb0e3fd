use chrono::NaiveDate;

use crate::schedule::interface::Recurrence;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EveryDay;

impl Recurrence for EveryDay {
    fn period_length(&self) -> u32 {
        1
    }

    fn matches_date(&self, _date: &NaiveDate) -> bool {
        true
    }
}
