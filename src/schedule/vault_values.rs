use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::ForecastError;
use crate::schedule::interface::{iso_weekday, ActiveWindow, Schedule, ScheduleKind};
use crate::schedule::{EveryDay, EveryMonth, EveryWeek, EveryYear, OnceInTwoWeeks, OneTime};

fn first_day_of_month() -> u32 {
    1
}

fn monday() -> u32 {
    1
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleKindVaultValue {
    OneTime {
        date: NaiveDate,
    },
    Today,
    Tomorrow,
    AfterDays {
        days: u64,
    },
    ThisWeek {
        weekday: u32,
    },
    NextWeek {
        weekday: u32,
    },
    EveryDay,
    EveryWeek {
        #[serde(default = "monday")]
        weekday: u32,
    },
    OnceInTwoWeeks {
        #[serde(default = "monday")]
        weekday: u32,
    },
    EveryMonth {
        #[serde(default = "first_day_of_month")]
        firing_day: u32,
    },
    EveryYear {
        month: u32,
        day: u32,
    },
}

impl ScheduleKindVaultValue {
    /// Relative one-time dates are resolved against `today`.
    pub fn into_schedule_kind(self, today: &NaiveDate) -> Result<ScheduleKind, ForecastError> {
        let kind: ScheduleKind = match self {
            ScheduleKindVaultValue::OneTime { date } => OneTime::new(date).into(),
            ScheduleKindVaultValue::Today => OneTime::today(today).into(),
            ScheduleKindVaultValue::Tomorrow => OneTime::tomorrow(today)?.into(),
            ScheduleKindVaultValue::AfterDays { days } => OneTime::after_days(today, days)?.into(),
            ScheduleKindVaultValue::ThisWeek { weekday } => {
                OneTime::this_week(today, iso_weekday(weekday)?)?.into()
            }
            ScheduleKindVaultValue::NextWeek { weekday } => {
                OneTime::next_week(today, iso_weekday(weekday)?)?.into()
            }
            ScheduleKindVaultValue::EveryDay => EveryDay.into(),
            ScheduleKindVaultValue::EveryWeek { weekday } => EveryWeek::new(weekday)?.into(),
            ScheduleKindVaultValue::OnceInTwoWeeks { weekday } => {
                OnceInTwoWeeks::new(weekday)?.into()
            }
            ScheduleKindVaultValue::EveryMonth { firing_day } => EveryMonth::new(firing_day)?.into(),
            ScheduleKindVaultValue::EveryYear { month, day } => EveryYear::new(month, day)?.into(),
        };
        Ok(kind)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScheduleVaultValue {
    #[serde(flatten)]
    pub kind: ScheduleKindVaultValue,
    #[serde(default)]
    pub first_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_date: Option<NaiveDate>,
}

impl ScheduleVaultValue {
    pub fn into_schedule(self, today: &NaiveDate) -> Result<Schedule, ForecastError> {
        if let (Some(first_date), Some(last_date)) = (&self.first_date, &self.last_date) {
            if first_date > last_date {
                return Err(ForecastError::invalid_argument(format!(
                    "schedule window starts on {} after it ends on {}",
                    first_date, last_date
                )));
            }
        }
        let window = ActiveWindow::new(self.first_date, self.last_date);
        Ok(Schedule::new(self.kind.into_schedule_kind(today)?).with_window(window))
    }
}
