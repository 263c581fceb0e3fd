use chrono::NaiveDate;

use crate::amounts::Figure;
use crate::errors::{ensure_range, ForecastError};
use crate::portfolio::Portfolio;
use crate::transfer::Transfer;

/// Each transfer of a period with the balance right after it.
pub type Forecast = Vec<(Transfer, Figure)>;

/// Initial balance and portfolio, everything a forecast is computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoneySheet {
    pub initial_balance: Figure,
    pub portfolio: Portfolio,
}

impl MoneySheet {
    pub fn new(initial_balance: Figure, portfolio: Portfolio) -> MoneySheet {
        MoneySheet {
            initial_balance,
            portfolio,
        }
    }

    /// Running balance over the period, framed by a `PERIOD-BEGIN` and a `PERIOD-END` marker.
    pub fn forecast_for_period(
        &self,
        start_date: &NaiveDate,
        end_date: &NaiveDate,
    ) -> Result<Forecast, ForecastError> {
        ensure_range(start_date, end_date)?;

        let transfers = self.portfolio.transfers_for_period(start_date, end_date)?;

        let mut balance = self.initial_balance;
        let mut forecast = Vec::with_capacity(transfers.len() + 2);
        forecast.push((Transfer::period_begin(*start_date), balance));
        for transfer in transfers {
            balance += transfer.amount;
            forecast.push((transfer, balance));
        }
        forecast.push((Transfer::period_end(*end_date), balance));

        Ok(forecast)
    }
}
