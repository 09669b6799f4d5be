use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("Invalid date format: {value} (expected {expected})")]
    InvalidDateFormat {
        value: String,
        expected: &'static str,
    },

    #[error("No historical contract titled: {title}")]
    ContractNotFound { title: String },

    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ScoutError>;
