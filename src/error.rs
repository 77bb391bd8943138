use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid daily rate: {0} (must be a positive finite number)")]
    InvalidRate(f64),

    #[error("Invalid date range: finish date {finished} precedes start date {started}")]
    InvalidDateRange {
        started: NaiveDate,
        finished: NaiveDate,
    },

    #[error("Invalid supply quantity: {0} (must be a positive finite number)")]
    InvalidQuantity(f64),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
