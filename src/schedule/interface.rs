use std::iter::successors;

use chrono::{NaiveDate, Weekday};

use crate::amounts::Figure;
use crate::errors::{ensure_range, ForecastError};
use crate::schedule::every_day::EveryDay;
use crate::schedule::every_month::EveryMonth;
use crate::schedule::every_week::EveryWeek;
use crate::schedule::every_year::EveryYear;
use crate::schedule::once_in_two_weeks::OnceInTwoWeeks;
use crate::schedule::one_time::OneTime;

pub trait Recurrence {
    /// Days per cycle, only used to normalize amounts to a daily basis.
    fn period_length(&self) -> u32;
    fn matches_date(&self, date: &NaiveDate) -> bool;

    /// Firing dates inside an already clipped window, in ascending order.
    fn select_dates(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        days_between(start, end)
            .filter(|date| self.matches_date(date))
            .collect()
    }
}

/// Every calendar day from `start` to `end`, both included.
pub fn days_between(start: &NaiveDate, end: &NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let end = *end;
    successors(Some(*start), NaiveDate::succ_opt).take_while(move |date| date <= &end)
}

/// ISO-8601 numbering: Monday is 1, Sunday is 7.
pub fn iso_weekday(number: u32) -> Result<Weekday, ForecastError> {
    match number {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(ForecastError::invalid_argument(format!(
            "weekday must be in the range [1..7], got {}",
            number
        ))),
    }
}

/// Inclusive range of dates outside of which nothing fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl Default for ActiveWindow {
    fn default() -> Self {
        ActiveWindow {
            first_date: NaiveDate::MIN,
            last_date: NaiveDate::MAX,
        }
    }
}

impl ActiveWindow {
    pub fn new(first_date: Option<NaiveDate>, last_date: Option<NaiveDate>) -> ActiveWindow {
        ActiveWindow {
            first_date: first_date.unwrap_or(NaiveDate::MIN),
            last_date: last_date.unwrap_or(NaiveDate::MAX),
        }
    }

    /// Narrows `start..=end` to this window, `None` when nothing is left.
    pub fn clip(&self, start: &NaiveDate, end: &NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let start = *start.max(&self.first_date);
        let end = *end.min(&self.last_date);
        if start > end {
            return None;
        }
        Some((start, end))
    }

    #[cfg(test)]
    pub fn contains(&self, date: &NaiveDate) -> bool {
        date >= &self.first_date && date <= &self.last_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleKind {
    OneTime(OneTime),
    EveryDay(EveryDay),
    EveryWeek(EveryWeek),
    OnceInTwoWeeks(OnceInTwoWeeks),
    EveryMonth(EveryMonth),
    EveryYear(EveryYear),
}

impl ScheduleKind {
    fn unpack(&self) -> &dyn Recurrence {
        match self {
            ScheduleKind::OneTime(s) => s,
            ScheduleKind::EveryDay(s) => s,
            ScheduleKind::EveryWeek(s) => s,
            ScheduleKind::OnceInTwoWeeks(s) => s,
            ScheduleKind::EveryMonth(s) => s,
            ScheduleKind::EveryYear(s) => s,
        }
    }
}

// TODO Generate the variant list of ScheduleKind with this macro as well
macro_rules! schedule_kind_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for ScheduleKind {
                fn from(value: $variant) -> Self {
                    ScheduleKind::$variant(value)
                }
            }

            impl From<$variant> for Schedule {
                fn from(value: $variant) -> Self {
                    Schedule::new(value)
                }
            }
        )*
    };
}

schedule_kind_from!(OneTime, EveryDay, EveryWeek, OnceInTwoWeeks, EveryMonth, EveryYear);

/// A recurrence rule bound to the window in which it is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    kind: ScheduleKind,
    window: ActiveWindow,
}

impl Schedule {
    pub fn new(kind: impl Into<ScheduleKind>) -> Schedule {
        Schedule {
            kind: kind.into(),
            window: ActiveWindow::default(),
        }
    }

    pub fn with_window(self, window: ActiveWindow) -> Schedule {
        Schedule { window, ..self }
    }

    #[cfg(test)]
    pub fn window(&self) -> &ActiveWindow {
        &self.window
    }

    pub fn period_length(&self) -> u32 {
        self.kind.unpack().period_length()
    }

    #[cfg(test)]
    pub fn matches_date(&self, date: &NaiveDate) -> bool {
        self.kind.unpack().matches_date(date)
    }

    /// Normalizes `value` to a daily basis according to the period of this schedule.
    pub fn daily_portion_of(&self, value: Figure) -> Result<Figure, ForecastError> {
        if value <= Figure::ZERO {
            return Err(ForecastError::invalid_argument(format!(
                "value must be positive, got {}",
                value
            )));
        }
        Ok(value / Figure::from(self.period_length()))
    }

    pub fn dates_for_period(
        &self,
        start_date: &NaiveDate,
        end_date: &NaiveDate,
    ) -> Result<Vec<NaiveDate>, ForecastError> {
        ensure_range(start_date, end_date)?;

        let Some((start, end)) = self.window.clip(start_date, end_date) else {
            return Ok(vec![]);
        };

        Ok(self.kind.unpack().select_dates(&start, &end))
    }
}
