use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Forecasts the balance of a money sheet over the coming months")]
pub struct ForecastOptions {
    #[arg(short = 'i', long = "input-file", default_value = "sheetdata.json")]
    pub input_file: PathBuf,

    #[arg(short = 'm', long = "forecast-months", default_value_t = 3)]
    pub forecast_months: u32,
}
