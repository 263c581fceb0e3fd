mod amounts;
mod calendar;
mod change;
mod cli;
mod errors;
mod forecast_runner;
mod logging;
mod money_sheet;
mod portfolio;
mod schedule;
mod sheet_reader;
mod transfer;
mod vault;

use crate::cli::forecast_operation;
fn main() {
    forecast_operation()
}
