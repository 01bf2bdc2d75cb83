use config::{Config, Environment};
use serde::Deserialize;
use tracing::debug;

use super::error::{Result, StatsError};
use crate::DEFAULT_CHUNK_SIZE;


pub const ENV_PREFIX: &str = "DELETION_STATS";


#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletionConfig {
    /// Upper bound on items sent to the store in one batch.
    pub chunk_size: usize,
}

impl DeletionConfig {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Reads `DELETION_STATS_*` variables on top of the defaults,
    /// e.g. `DELETION_STATS_CHUNK_SIZE=50`.
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    pub fn from_environment(source: Environment) -> Result<Self> {
        let config: Self = Config::builder()
            .set_default("chunk_size", DEFAULT_CHUNK_SIZE as i64)?
            .add_source(source.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!("Loaded deletion config: chunk_size={}", config.chunk_size);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(StatsError::Validation(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DeletionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}
