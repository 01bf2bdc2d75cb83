pub mod models;
pub mod format;
pub mod chunking;
pub mod accumulator;


pub use models::{DeletionStats, SizeUnit};
pub use format::{format_size, freed_size_formatted};
pub use chunking::{chunk_count_for, plan_chunks};
pub use accumulator::DeletionStatsAccumulator;
