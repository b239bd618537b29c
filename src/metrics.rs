//! Query Metrics
//!
//! Per-kind query counters and latency tracking.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Latency summary for one query kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryStats {
    pub count: u64,
    pub total_us: u64,
    pub min_us: u64,
    pub max_us: u64,
}

impl QueryStats {
    fn record(&mut self, latency_us: u64) {
        self.min_us = if self.count == 0 {
            latency_us
        } else {
            self.min_us.min(latency_us)
        };
        self.max_us = self.max_us.max(latency_us);
        self.total_us += latency_us;
        self.count += 1;
    }

    /// Average latency in microseconds
    pub fn avg_us(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total_us as f64 / self.count as f64
    }
}

/// Metrics collector shared by every query path
#[derive(Debug, Default)]
pub struct QueryMetrics {
    total_queries: AtomicU64,
    by_kind: DashMap<&'static str, QueryStats>,
}

impl QueryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one query of `kind`
    pub fn record(&self, kind: &'static str, latency: Duration) {
        self.total_queries.fetch_add(1, Ordering::Relaxed);
        let latency_us = latency.as_micros() as u64;
        self.by_kind.entry(kind).or_default().record(latency_us);
    }

    /// Run `f` and record its latency under `kind`
    pub fn time<R>(&self, kind: &'static str, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let result = f();
        self.record(kind, start.elapsed());
        result
    }

    pub fn total_queries(&self) -> u64 {
        self.total_queries.load(Ordering::Relaxed)
    }

    pub fn stats(&self, kind: &str) -> Option<QueryStats> {
        self.by_kind.get(kind).map(|s| *s)
    }

    /// One line per query kind, sorted by kind
    pub fn summary(&self) -> String {
        let mut kinds: Vec<(&'static str, QueryStats)> =
            self.by_kind.iter().map(|e| (*e.key(), *e.value())).collect();
        kinds.sort_by(|a, b| a.0.cmp(b.0));

        let mut out = format!("Queries: {}", self.total_queries());
        for (kind, stats) in kinds {
            out.push_str(&format!(
                "\n  {}: count={} latency(µs) avg={:.1}, min={}, max={}",
                kind,
                stats.count,
                stats.avg_us(),
                stats.min_us,
                stats.max_us
            ));
        }
        out
    }
}
