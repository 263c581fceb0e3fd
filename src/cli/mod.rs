use crate::calendar::SystemCalendar;
use crate::forecast_runner::ForecastRunner;
use crate::logging::init_tracing;
use crate::vault::VaultImpl;
use argument_parsing::ForecastOptions;
use clap::Parser;

mod argument_parsing;
mod formatting;

pub fn forecast_operation() {
    init_tracing();

    let result: Result<String, String> = (|| {
        let arguments = ForecastOptions::parse();
        let vault = VaultImpl {
            path: arguments.input_file,
        };

        let runner = ForecastRunner::new(vault, SystemCalendar);
        let report = runner.run_for_period(arguments.forecast_months)?;

        Ok(formatting::format_forecast_report(&report))
    })();

    if let Ok(screen) = result {
        println!("{}", screen)
    } else if let Err(error) = result {
        println!("Could not compute forecast: {}", error)
    }
}
