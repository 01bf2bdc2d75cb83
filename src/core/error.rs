use thiserror::Error;


#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for StatsError {
    fn from(err: config::ConfigError) -> Self {
        StatsError::Config(err.to_string())
    }
}


pub type Result<T> = std::result::Result<T, StatsError>;
