use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown event type: {0}")]
    UnknownEventType(String),
    #[error("unknown view mode: {0}")]
    UnknownViewMode(String),
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read events file {path}: {source}")]
    EventsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse events file: {0}")]
    EventsFileParse(#[source] serde_yaml::Error),

    #[error("events validation error: {0}")]
    Validation(String),
}
