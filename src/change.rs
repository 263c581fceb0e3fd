use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::amounts::{Direction, Figure};
use crate::errors::{ensure_range, ForecastError};
use crate::schedule::{ActiveWindow, Schedule, ScheduleVaultValue};
use crate::transfer::Transfer;

/// Dates between which a change applies. Missing bounds are unbounded.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validity {
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
}

impl Validity {
    pub fn window(&self) -> ActiveWindow {
        ActiveWindow::new(self.valid_from, self.valid_until)
    }
}

/// A change, positive or negative, of the money balance, with a fixed amount
/// happening periodically following a schedule.
#[derive(Debug, Clone)]
pub struct Change {
    description: String,
    amount: Figure,
    schedule: Schedule,
    validity: Validity,
}

impl Change {
    pub fn new(description: impl Into<String>, amount: Figure, schedule: impl Into<Schedule>) -> Change {
        Change {
            description: description.into(),
            amount,
            schedule: schedule.into(),
            validity: Validity::default(),
        }
    }

    /// Incoming money.
    pub fn gain(description: impl Into<String>, amount: Figure, schedule: impl Into<Schedule>) -> Change {
        Change::new(description, Direction::Gain.signed(amount), schedule)
    }

    /// Outgoing money.
    pub fn dump(description: impl Into<String>, amount: Figure, schedule: impl Into<Schedule>) -> Change {
        Change::new(description, Direction::Dump.signed(amount), schedule)
    }

    pub fn with_validity(self, validity: Validity) -> Change {
        Change { validity, ..self }
    }

    pub fn amount(&self) -> &Figure {
        &self.amount
    }

    #[cfg(test)]
    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    pub fn transfers_for_period(
        &self,
        start_date: &NaiveDate,
        end_date: &NaiveDate,
    ) -> Result<Vec<Transfer>, ForecastError> {
        ensure_range(start_date, end_date)?;

        let Some((start, end)) = self.validity.window().clip(start_date, end_date) else {
            return Ok(vec![]);
        };

        let transfers: Vec<Transfer> = self
            .schedule
            .dates_for_period(&start, &end)?
            .into_iter()
            .map(|date| Transfer::new(date, self.description.clone(), self.amount))
            .collect();

        if transfers.is_empty() {
            debug!(
                change = %self.description,
                %start,
                %end,
                "Change has no transfer in period"
            );
        }

        Ok(transfers)
    }

    pub fn daily_average(&self) -> Result<Figure, ForecastError> {
        self.schedule.daily_portion_of(self.amount.abs())
    }
}

// Only description and amount take part in equality.
impl PartialEq for Change {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description && self.amount == other.amount
    }
}

impl Eq for Change {}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChangeFields {
    pub description: String,
    pub amount: Figure,
    pub schedule: ScheduleVaultValue,
    #[serde(flatten)]
    pub validity: Validity,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeVaultValue {
    Gain(ChangeFields),
    Dump(ChangeFields),
}

impl ChangeVaultValue {
    pub fn into_change(self, today: &NaiveDate) -> Result<Change, ForecastError> {
        let (direction, fields) = match self {
            ChangeVaultValue::Gain(fields) => (Direction::Gain, fields),
            ChangeVaultValue::Dump(fields) => (Direction::Dump, fields),
        };

        if let (Some(valid_from), Some(valid_until)) =
            (&fields.validity.valid_from, &fields.validity.valid_until)
        {
            if valid_from > valid_until {
                return Err(ForecastError::invalid_argument(format!(
                    "change '{}' is valid from {} after being valid until {}",
                    fields.description, valid_from, valid_until
                )));
            }
        }

        let schedule = fields.schedule.into_schedule(today)?;
        let change = match direction {
            Direction::Gain => Change::gain(fields.description, fields.amount, schedule),
            Direction::Dump => Change::dump(fields.description, fields.amount, schedule),
        };
        Ok(change.with_validity(fields.validity))
    }
}
