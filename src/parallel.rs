//! Partitioned Work
//!
//! Order-preserving map over a slice on scoped worker threads. The input is
//! split into contiguous chunks, each worker builds its own output vector,
//! and the chunks are concatenated in order. Nothing is shared mutably.

use std::panic;
use tracing::debug;

/// Resolve a configured worker count (0 = auto-detect)
pub fn resolve_workers(configured: usize) -> usize {
    if configured == 0 {
        num_cpus::get()
    } else {
        configured
    }
}

/// Map every item, keeping input order
pub fn map_partitioned<T, U, F>(items: &[T], workers: usize, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync,
{
    filter_map_partitioned(items, workers, |item| Some(f(item)))
}

/// Filter-map every item, keeping input order of the survivors
///
/// Runs inline when `workers <= 1` or there is too little input to split.
/// A panicking worker is re-raised on the calling thread.
pub fn filter_map_partitioned<T, U, F>(items: &[T], workers: usize, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Option<U> + Sync,
{
    let workers = workers.min(items.len());
    if workers <= 1 {
        return items.iter().filter_map(&f).collect();
    }

    let chunk_size = items.len().div_ceil(workers);
    let f = &f;

    let partitions: Vec<Vec<U>> = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move |_| chunk.iter().filter_map(f).collect::<Vec<U>>()))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
    .unwrap_or_else(|payload| panic::resume_unwind(payload));

    debug!(
        "Merged {} partitions of up to {} items",
        partitions.len(),
        chunk_size
    );

    let mut merged = Vec::with_capacity(partitions.iter().map(Vec::len).sum());
    for partition in partitions {
        merged.extend(partition);
    }
    merged
}
