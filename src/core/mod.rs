

pub mod config;
pub mod error;

pub use config::DeletionConfig;
pub use error::{Result, StatsError};
