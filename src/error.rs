use chrono::NaiveDate;

#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("failed to fetch search page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    // arXiv only serves these page sizes.
    #[error("page size {0} not supported, expected one of 25, 50, 100, 200")]
    InvalidPageSize(u32),

    #[error("{0} must be positive")]
    NotPositive(String),

    #[error("{key} of {days} days reaches outside the supported calendar")]
    DateOutOfRange { key: String, days: u32 },

    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl ConfigError {
    pub fn invalid_value(key: &str, value: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
