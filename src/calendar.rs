use chrono::{Local, NaiveDate};
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Calendar {
    fn today(&self) -> NaiveDate;
}

pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
