mod every_day;
mod every_month;
mod every_week;
mod every_year;
mod interface;
mod once_in_two_weeks;
mod one_time;
mod vault_values;

pub use every_day::EveryDay;
pub use every_month::EveryMonth;
pub use every_week::EveryWeek;
pub use every_year::EveryYear;
pub use interface::{ActiveWindow, Schedule};
pub use once_in_two_weeks::OnceInTwoWeeks;
pub use one_time::OneTime;
pub use vault_values::ScheduleVaultValue;
