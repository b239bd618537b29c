//! SEMANTIX - In-Memory Word Vector Engine
//!
//! Nearest-neighbor and analogy queries over a fixed catalog of word
//! vectors, ranked by cosine similarity with a binary heap sort.

pub mod catalog;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod parallel;
pub mod query;
pub mod ranking;
pub mod vector;

pub use catalog::{Catalog, CatalogBuilder, CatalogEntry, SourceRow};
pub use config::Config;
pub use engine::Engine;
pub use error::{CatalogError, ParseVectorError, SourceError};
pub use metrics::QueryMetrics;
pub use query::{AnalogyResolver, NearestNeighbors, ScanOptions};
pub use ranking::{rank, rank_top, QueryIdentity, ScoredPair};
pub use vector::Vector;
