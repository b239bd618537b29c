//! Query Module
//!
//! Nearest-neighbor and analogy queries over a [`Catalog`](crate::catalog::Catalog).

mod analogy;
mod nearest;

pub use analogy::AnalogyResolver;
pub use nearest::NearestNeighbors;

/// How a catalog scan is spread across threads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Worker threads used for scoring (already resolved, never 0)
    pub workers: usize,
    /// Minimum number of candidates before scoring is sharded
    pub parallel_threshold: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            parallel_threshold: 4096,
        }
    }
}

impl ScanOptions {
    /// Always score on the calling thread
    pub fn sequential() -> Self {
        Self {
            workers: 1,
            parallel_threshold: usize::MAX,
        }
    }
}
