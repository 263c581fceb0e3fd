use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the forecasting core. Both are configuration or programming errors:
/// nothing retries them and no partial forecast is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("Start date {start_date} is after end date {end_date}")]
    InvalidRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ForecastError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ForecastError::InvalidArgument(message.into())
    }
}

/// Checks the ordering every date range operation requires.
pub fn ensure_range(start_date: &NaiveDate, end_date: &NaiveDate) -> Result<(), ForecastError> {
    if start_date > end_date {
        return Err(ForecastError::InvalidRange {
            start_date: *start_date,
            end_date: *end_date,
        });
    }
    Ok(())
}

/// Failures while loading a money sheet out of the vault.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Could not read vault {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Could not parse vault: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Vault has no value for key '{0}'")]
    MissingKey(String),
    #[error("Invalid money sheet: {0}")]
    Invalid(#[from] ForecastError),
}
