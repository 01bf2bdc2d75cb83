use tracing::debug;

use crate::core::error::{Result, StatsError};


pub fn plan_chunks<T: Clone>(items: &[T], chunk_size: usize) -> Result<Vec<Vec<T>>> {
    ensure_chunk_size(chunk_size)?;

    let chunks: Vec<Vec<T>> = items.chunks(chunk_size).map(|c| c.to_vec()).collect();
    debug!(
        "Planned {} items into {} chunks (chunk_size: {})",
        items.len(),
        chunks.len(),
        chunk_size
    );
    Ok(chunks)
}


/// Number of batches a deletion of `total_items` takes. Never less than one,
/// matching the default of [`DeletionStats`](super::DeletionStats).
pub fn chunk_count_for(total_items: u64, chunk_size: usize) -> Result<u32> {
    ensure_chunk_size(chunk_size)?;

    let chunks = total_items.div_ceil(chunk_size as u64).max(1);
    Ok(u32::try_from(chunks).unwrap_or(u32::MAX))
}

fn ensure_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(StatsError::Validation(
            "chunk_size must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
