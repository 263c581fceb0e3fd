use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::ForecastError;
use crate::schedule::interface::{days_between, iso_weekday, Recurrence};

/// Every other occurrence of a weekday, counted from the first occurrence of
/// the queried window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnceInTwoWeeks {
    weekday: Weekday,
}

impl Default for OnceInTwoWeeks {
    fn default() -> Self {
        OnceInTwoWeeks {
            weekday: Weekday::Mon,
        }
    }
}

impl OnceInTwoWeeks {
    /// `weekday` uses ISO numbering, 1 for Monday to 7 for Sunday.
    pub fn new(weekday: u32) -> Result<OnceInTwoWeeks, ForecastError> {
        Ok(OnceInTwoWeeks {
            weekday: iso_weekday(weekday)?,
        })
    }
}

impl Recurrence for OnceInTwoWeeks {
    fn period_length(&self) -> u32 {
        14
    }

    /// Candidate dates only: which of them fire depends on their rank in the window.
    fn matches_date(&self, date: &NaiveDate) -> bool {
        date.weekday() == self.weekday
    }

    fn select_dates(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        days_between(start, end)
            .filter(|date| self.matches_date(date))
            .step_by(2)
            .collect()
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::OnceInTwoWeeks;
    use crate::errors::ForecastError;
    use crate::schedule::Schedule;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn new__invalid_weekday() {
        assert!(matches!(OnceInTwoWeeks::new(0), Err(ForecastError::InvalidArgument(_))));
        assert!(matches!(OnceInTwoWeeks::new(8), Err(ForecastError::InvalidArgument(_))));
    }

    #[test]
    fn daily_portion_of__fourteen_days() {
        let schedule = Schedule::new(OnceInTwoWeeks::default());
        assert_eq!(schedule.daily_portion_of(dec!(140)).unwrap(), dec!(10));
        assert_eq!(schedule.daily_portion_of(dec!(14)).unwrap(), dec!(1));
        assert!(schedule.daily_portion_of(dec!(13)).unwrap() < dec!(1));
        assert!(schedule.daily_portion_of(dec!(15)).unwrap() > dec!(1));
    }

    #[test]
    fn dates_for_period__every_other_saturday() {
        let schedule = Schedule::new(OnceInTwoWeeks::new(6).unwrap());
        assert_eq!(
            schedule
                .dates_for_period(&date(2011, 12, 24), &date(2012, 1, 21))
                .unwrap(),
            vec![date(2011, 12, 24), date(2012, 1, 7), date(2012, 1, 21)]
        )
    }

    #[test]
    fn dates_for_period__same_start_and_end() {
        let schedule = Schedule::new(OnceInTwoWeeks::new(6).unwrap());
        assert_eq!(
            schedule
                .dates_for_period(&date(2011, 12, 24), &date(2011, 12, 24))
                .unwrap(),
            vec![date(2011, 12, 24)]
        )
    }

    #[test]
    fn dates_for_period__repeated_query_gives_same_alternation() {
        let schedule = Schedule::new(OnceInTwoWeeks::new(6).unwrap());
        let first = schedule
            .dates_for_period(&date(2011, 12, 24), &date(2012, 1, 21))
            .unwrap();
        let second = schedule
            .dates_for_period(&date(2011, 12, 24), &date(2012, 1, 21))
            .unwrap();
        assert_eq!(first, second)
    }

    #[test]
    fn dates_for_period__alternation_starts_at_first_match_of_window() {
        let schedule = Schedule::new(OnceInTwoWeeks::new(6).unwrap());
        assert_eq!(
            schedule
                .dates_for_period(&date(2011, 12, 25), &date(2012, 1, 21))
                .unwrap(),
            vec![date(2011, 12, 31), date(2012, 1, 14)]
        )
    }

    #[test]
    fn dates_for_period__dates_match_weekday() {
        let schedule = Schedule::new(OnceInTwoWeeks::new(3).unwrap());
        let dates = schedule
            .dates_for_period(&date(2012, 1, 1), &date(2012, 12, 31))
            .unwrap();
        assert_eq!(dates.len(), 26);
        assert!(dates.iter().all(|found| schedule.matches_date(found)));
    }
}
