use chrono::NaiveDate;
use tracing::debug;

use crate::amounts::{Direction, Figure};
use crate::change::Change;
use crate::errors::{ensure_range, ForecastError};
use crate::schedule::{EveryMonth, Schedule};
use crate::transfer::Transfer;

pub mod group {
    use crate::change::Change;
    #[cfg(test)]
    use crate::{amounts::Figure, errors::ForecastError};

    /// Changes under a common category.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Group {
        pub name: String,
        pub changes: Vec<Change>,
    }

    impl Group {
        pub fn new(name: impl Into<String>, changes: Vec<Change>) -> Group {
            Group {
                name: name.into(),
                changes,
            }
        }

        #[cfg(test)]
        pub fn daily_average(&self) -> Result<Figure, ForecastError> {
            self.changes
                .iter()
                .map(Change::daily_average)
                .sum::<Result<Figure, ForecastError>>()
        }
    }

}

use group::Group;

/// Every gain and dump of the user, organized in groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    pub groups: Vec<Group>,
}

impl Portfolio {
    pub fn new(groups: Vec<Group>) -> Portfolio {
        Portfolio { groups }
    }

    pub fn changes(&self) -> impl Iterator<Item = &Change> {
        self.groups.iter().flat_map(|group| group.changes.iter())
    }

    fn monthly_average(&self, direction: Direction) -> Result<Figure, ForecastError> {
        let daily: Figure = self
            .changes()
            .filter(|change| Direction::of(change.amount()) == Some(direction))
            .map(Change::daily_average)
            .sum::<Result<Figure, ForecastError>>()?;
        let month_length = Schedule::new(EveryMonth::default()).period_length();
        Ok(daily * Figure::from(month_length))
    }

    /// Average income over a month, regardless of any forecast window.
    pub fn monthly_gains(&self) -> Result<Figure, ForecastError> {
        self.monthly_average(Direction::Gain)
    }

    /// Average spending over a month, as a positive figure.
    pub fn monthly_dumps(&self) -> Result<Figure, ForecastError> {
        self.monthly_average(Direction::Dump)
    }

    pub fn monthly_balance(&self) -> Result<Figure, ForecastError> {
        Ok(self.monthly_gains()? - self.monthly_dumps()?)
    }

    /// All transfers of all changes, sorted by date and then reason.
    pub fn transfers_for_period(
        &self,
        start_date: &NaiveDate,
        end_date: &NaiveDate,
    ) -> Result<Vec<Transfer>, ForecastError> {
        ensure_range(start_date, end_date)?;

        let mut transfers = vec![];
        for change in self.changes() {
            transfers.extend(change.transfers_for_period(start_date, end_date)?);
        }
        transfers.sort_by(Transfer::chronological);

        debug!(
            %start_date,
            %end_date,
            transfers = transfers.len(),
            "Collected portfolio transfers"
        );
        Ok(transfers)
    }
}
