use tracing::{debug, info, warn};

use super::models::DeletionStats;


/// Folds per-chunk results of a running deletion into a [`DeletionStats`].
#[derive(Debug, Default, Clone)]
pub struct DeletionStatsAccumulator {
    total_count: u64,
    total_size_bytes: i64,
    chunks: u32,
}

impl DeletionStatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_chunk(&mut self, deleted: u64, freed_bytes: i64) {
        if freed_bytes < 0 {
            warn!(
                "Chunk {} reported negative freed size: {}",
                self.chunks.saturating_add(1),
                freed_bytes
            );
        }

        self.total_count = self.total_count.saturating_add(deleted);
        self.total_size_bytes = self.total_size_bytes.saturating_add(freed_bytes);
        self.chunks = self.chunks.saturating_add(1);

        debug!(
            "Recorded chunk {}: deleted={}, freed_bytes={}",
            self.chunks, deleted, freed_bytes
        );
    }

    pub fn chunks_recorded(&self) -> u32 {
        self.chunks
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_size_bytes(&self) -> i64 {
        self.total_size_bytes
    }

    pub fn finish(self) -> DeletionStats {
        let stats =
            DeletionStats::with_chunks(self.total_count, self.total_size_bytes, self.chunks.max(1));
        info!("Deletion finished: {}", stats);
        stats
    }
}
