//! Engine Configuration

use std::path::PathBuf;

use crate::catalog::FALLBACK_WORD;
use crate::parallel::resolve_workers;
use crate::query::ScanOptions;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Vector table (`word,v1,...,vn` per line)
    pub vectors_path: PathBuf,

    /// Stopword list, one word per line (None = no filtering)
    pub stopwords_path: Option<PathBuf>,

    /// Word whose vector stands in for unknown query words
    pub fallback_word: String,

    /// Required component count per row (None = any)
    pub dimension: Option<usize>,

    /// Number of worker threads (0 = auto-detect)
    pub workers: usize,

    /// Minimum catalog size before scoring is sharded across workers
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vectors_path: PathBuf::from("glove.6B.50d_Reduced.csv"),
            stopwords_path: Some(PathBuf::from("stopwords.csv")),
            fallback_word: FALLBACK_WORD.to_string(),
            dimension: None,
            workers: 0,
            parallel_threshold: 4096,
        }
    }
}

impl Config {
    pub fn with_vectors_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vectors_path = path.into();
        self
    }

    pub fn with_stopwords_path(mut self, path: Option<PathBuf>) -> Self {
        self.stopwords_path = path;
        self
    }

    pub fn with_fallback_word(mut self, word: impl Into<String>) -> Self {
        self.fallback_word = word.into();
        self
    }

    pub fn with_dimension(mut self, dimension: Option<usize>) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Worker count with auto-detection applied
    pub fn resolved_workers(&self) -> usize {
        resolve_workers(self.workers)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            workers: self.resolved_workers(),
            parallel_threshold: self.parallel_threshold,
        }
    }
}
