pub mod core;
pub mod deletion;


pub use crate::core::config::DeletionConfig;
pub use crate::core::error::{Result, StatsError};
pub use deletion::{
    DeletionStats, DeletionStatsAccumulator, SizeUnit, chunk_count_for, format_size,
    freed_size_formatted, plan_chunks,
};


pub const DEFAULT_CHUNK_SIZE: usize = 100;


pub const DEFAULT_LOG_FILTER: &str = "warn";
