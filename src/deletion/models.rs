use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::format::freed_size_formatted;


pub const KILO: i64 = 1024;


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum SizeUnit {
    B,
    KB,
    MB,
    GB,
    TB,
}

impl SizeUnit {
    pub const LARGEST: SizeUnit = SizeUnit::TB;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Indices past the largest unit clamp to TB.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => SizeUnit::B,
            1 => SizeUnit::KB,
            2 => SizeUnit::MB,
            3 => SizeUnit::GB,
            _ => SizeUnit::TB,
        }
    }

    pub fn multiplier(self) -> i64 {
        KILO.pow(self.index() as u32)
    }
}


/// Outcome of one batch deletion. Values are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeletionStats {
    total_count: u64,
    total_size_bytes: i64,
    #[serde(default = "default_chunk_count")]
    chunk_count: u32,
}

fn default_chunk_count() -> u32 {
    1
}

impl DeletionStats {
    pub fn new(total_count: u64, total_size_bytes: i64) -> Self {
        Self::with_chunks(total_count, total_size_bytes, default_chunk_count())
    }

    pub fn with_chunks(total_count: u64, total_size_bytes: i64, chunk_count: u32) -> Self {
        Self {
            total_count,
            total_size_bytes,
            chunk_count,
        }
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_size_bytes(&self) -> i64 {
        self.total_size_bytes
    }

    pub fn chunk_count(&self) -> u32 {
        self.chunk_count
    }

    pub fn freed_size_formatted(&self) -> String {
        freed_size_formatted(*self)
    }

    /// Combines two outcomes as if they were one deletion run.
    pub fn merge(self, other: DeletionStats) -> DeletionStats {
        Self {
            total_count: self.total_count.saturating_add(other.total_count),
            total_size_bytes: self.total_size_bytes.saturating_add(other.total_size_bytes),
            chunk_count: self.chunk_count.saturating_add(other.chunk_count),
        }
    }
}

impl Default for DeletionStats {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for DeletionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} deleted, {} freed in {} {}",
            self.total_count,
            plural(self.total_count, "item"),
            self.freed_size_formatted(),
            self.chunk_count,
            plural(u64::from(self.chunk_count), "chunk"),
        )
    }
}

fn plural(n: u64, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
