use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::errors::ForecastError;
use crate::schedule::interface::Recurrence;

/// Something that happens on exactly one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneTime {
    transfer_date: NaiveDate,
}

fn days_after(date: &NaiveDate, days: u64) -> Result<NaiveDate, ForecastError> {
    date.checked_add_days(Days::new(days)).ok_or_else(|| {
        ForecastError::invalid_argument(format!("{} days after {} is out of range", days, date))
    })
}

fn monday_of_week(date: &NaiveDate) -> Result<NaiveDate, ForecastError> {
    let since_monday = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(since_monday))
        .ok_or_else(|| ForecastError::invalid_argument(format!("No monday before {}", date)))
}

impl OneTime {
    pub fn new(transfer_date: NaiveDate) -> OneTime {
        OneTime { transfer_date }
    }

    #[cfg(test)]
    pub fn transfer_date(&self) -> &NaiveDate {
        &self.transfer_date
    }

    pub fn today(today: &NaiveDate) -> OneTime {
        OneTime::new(*today)
    }

    pub fn tomorrow(today: &NaiveDate) -> Result<OneTime, ForecastError> {
        OneTime::after_days(today, 1)
    }

    pub fn after_days(today: &NaiveDate, days: u64) -> Result<OneTime, ForecastError> {
        Ok(OneTime::new(days_after(today, days)?))
    }

    /// The given weekday of the current week. Fails if that day has already passed.
    pub fn this_week(today: &NaiveDate, weekday: Weekday) -> Result<OneTime, ForecastError> {
        let monday = monday_of_week(today)?;
        let transfer_date = days_after(&monday, weekday.num_days_from_monday() as u64)?;
        if &transfer_date < today {
            return Err(ForecastError::invalid_argument(format!(
                "{} of this week ({}) has already passed",
                weekday, transfer_date
            )));
        }
        Ok(OneTime::new(transfer_date))
    }

    pub fn next_week(today: &NaiveDate, weekday: Weekday) -> Result<OneTime, ForecastError> {
        let next_monday = days_after(&monday_of_week(today)?, 7)?;
        Ok(OneTime::new(days_after(
            &next_monday,
            weekday.num_days_from_monday() as u64,
        )?))
    }
}

impl Recurrence for OneTime {
    fn period_length(&self) -> u32 {
        1
    }

    fn matches_date(&self, date: &NaiveDate) -> bool {
        date == &self.transfer_date
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::OneTime;
    use crate::errors::ForecastError;
    use crate::schedule::Schedule;
    use chrono::{Days, NaiveDate, Weekday};
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn check_single_date(one_time: OneTime) {
        let schedule = Schedule::new(one_time);
        let transfer_date = *one_time.transfer_date();
        let before = |days| transfer_date - Days::new(days);
        let after = |days| transfer_date + Days::new(days);

        assert_eq!(schedule.daily_portion_of(dec!(1)).unwrap(), dec!(1));
        assert_eq!(schedule.daily_portion_of(dec!(2)).unwrap(), dec!(2));

        let single = vec![transfer_date];
        assert_eq!(schedule.dates_for_period(&transfer_date, &transfer_date).unwrap(), single);
        assert_eq!(schedule.dates_for_period(&before(1), &transfer_date).unwrap(), single);
        assert_eq!(schedule.dates_for_period(&transfer_date, &after(1)).unwrap(), single);
        assert_eq!(schedule.dates_for_period(&before(1), &after(1)).unwrap(), single);
        assert!(schedule.dates_for_period(&after(1), &after(2)).unwrap().is_empty());
        assert!(schedule.dates_for_period(&before(2), &before(1)).unwrap().is_empty());
    }

    #[test]
    fn one_time__dates_for_period() {
        check_single_date(OneTime::new(date(1111, 11, 11)))
    }

    #[test]
    fn today__dates_for_period() {
        let today = date(2016, 4, 13);
        assert_eq!(OneTime::today(&today).transfer_date(), &today);
        check_single_date(OneTime::today(&today))
    }

    #[test]
    fn tomorrow__is_one_day_after_today() {
        let today = date(2016, 4, 13);
        assert_eq!(OneTime::tomorrow(&today).unwrap().transfer_date(), &date(2016, 4, 14));
        check_single_date(OneTime::tomorrow(&today).unwrap())
    }

    #[test]
    fn after_days__consistent_with_tomorrow() {
        let today = date(2016, 12, 31);
        let tomorrow = OneTime::tomorrow(&today).unwrap();
        let after_two_days = OneTime::after_days(&today, 2).unwrap();
        assert_eq!(after_two_days.transfer_date(), &date(2017, 1, 2));
        assert_eq!(
            after_two_days.transfer_date(),
            &(*tomorrow.transfer_date() + Days::new(1))
        );
        check_single_date(after_two_days)
    }

    #[test]
    fn after_days__out_of_range() {
        assert!(matches!(
            OneTime::after_days(&NaiveDate::MAX, 1),
            Err(ForecastError::InvalidArgument(_))
        ))
    }

    #[test]
    fn this_week__from_monday() {
        let monday = date(2016, 4, 11);
        let expected = [
            (Weekday::Mon, date(2016, 4, 11)),
            (Weekday::Tue, date(2016, 4, 12)),
            (Weekday::Wed, date(2016, 4, 13)),
            (Weekday::Thu, date(2016, 4, 14)),
            (Weekday::Fri, date(2016, 4, 15)),
            (Weekday::Sat, date(2016, 4, 16)),
            (Weekday::Sun, date(2016, 4, 17)),
        ];
        for (weekday, transfer_date) in expected {
            assert_eq!(
                OneTime::this_week(&monday, weekday).unwrap().transfer_date(),
                &transfer_date
            )
        }
    }

    #[test]
    fn this_week__weekday_already_passed() {
        let tuesday = date(2016, 4, 12);
        assert!(matches!(
            OneTime::this_week(&tuesday, Weekday::Mon),
            Err(ForecastError::InvalidArgument(_))
        ))
    }

    #[test]
    fn this_week__sunday_from_sunday() {
        let sunday = date(2016, 4, 17);
        check_single_date(OneTime::this_week(&sunday, Weekday::Sun).unwrap())
    }

    #[test]
    fn next_week__from_sunday() {
        let sunday = date(2016, 4, 24);
        let expected = [
            (Weekday::Mon, date(2016, 4, 25)),
            (Weekday::Tue, date(2016, 4, 26)),
            (Weekday::Wed, date(2016, 4, 27)),
            (Weekday::Thu, date(2016, 4, 28)),
            (Weekday::Fri, date(2016, 4, 29)),
            (Weekday::Sat, date(2016, 4, 30)),
            (Weekday::Sun, date(2016, 5, 1)),
        ];
        for (weekday, transfer_date) in expected {
            assert_eq!(
                OneTime::next_week(&sunday, weekday).unwrap().transfer_date(),
                &transfer_date
            )
        }
    }

    #[test]
    fn next_week__from_monday() {
        let monday = date(2016, 4, 11);
        assert_eq!(
            OneTime::next_week(&monday, Weekday::Mon).unwrap().transfer_date(),
            &date(2016, 4, 18)
        );
        check_single_date(OneTime::next_week(&monday, Weekday::Mon).unwrap())
    }
}
