use chrono::{Days, NaiveDate};
use tracing::info;

use crate::amounts::Figure;
use crate::calendar::Calendar;
use crate::money_sheet::Forecast;
use crate::sheet_reader::SheetReader;

/// Days counted for each month of the forecast horizon.
pub const DAYS_PER_MONTH: u64 = 30;

/* Entrypoint */
pub struct ForecastRunner<R: SheetReader, C: Calendar> {
    reader: R,
    calendar: C,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub forecast: Forecast,
    pub monthly_gains: Figure,
    pub monthly_dumps: Figure,
    pub monthly_balance: Figure,
}

impl<R: SheetReader, C: Calendar> ForecastRunner<R, C> {
    pub fn new(reader: R, calendar: C) -> ForecastRunner<R, C> {
        ForecastRunner { reader, calendar }
    }

    /// Forecast from today over `months` months of thirty days.
    pub fn run_for_period(&self, months: u32) -> Result<ForecastReport, String> {
        let start_date = self.calendar.today();
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(months) * DAYS_PER_MONTH))
            .ok_or(format!(
                "Forecast of {} months from {} ends out of the calendar",
                months, start_date
            ))?;

        info!(%start_date, %end_date, months, "Running forecast");

        let sheet = self
            .reader
            .money_sheet(&start_date)
            .map_err(|error| error.to_string())?;
        let forecast = sheet
            .forecast_for_period(&start_date, &end_date)
            .map_err(|error| error.to_string())?;

        let portfolio = &sheet.portfolio;
        Ok(ForecastReport {
            start_date,
            end_date,
            forecast,
            monthly_gains: portfolio.monthly_gains().map_err(|error| error.to_string())?,
            monthly_dumps: portfolio.monthly_dumps().map_err(|error| error.to_string())?,
            monthly_balance: portfolio
                .monthly_balance()
                .map_err(|error| error.to_string())?,
        })
    }
}
