//! Query Engine
//!
//! Owns a finished catalog and serves neighbor and analogy queries against it.

use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::catalog::{load_stopwords, load_vectors, Catalog};
use crate::config::Config;
use crate::error::CatalogError;
use crate::metrics::QueryMetrics;
use crate::query::{AnalogyResolver, NearestNeighbors, ScanOptions};
use crate::ranking::ScoredPair;
use crate::vector::Vector;

/// Word-vector query engine
///
/// Cheap to clone; the catalog and metrics are shared.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<Catalog>,
    options: ScanOptions,
    metrics: Arc<QueryMetrics>,
}

impl Engine {
    /// Create an engine over an already built catalog
    pub fn new(catalog: Catalog, options: ScanOptions) -> Self {
        Self {
            catalog: Arc::new(catalog),
            options,
            metrics: Arc::new(QueryMetrics::new()),
        }
    }

    /// Load the vector table and stopwords named by `config` and build the catalog
    ///
    /// Fails when the source is unreadable or malformed, or when the fallback
    /// word is missing from the vocabulary.
    pub fn load(config: &Config) -> Result<Self, CatalogError> {
        let start = Instant::now();
        let workers = config.resolved_workers();

        let rows = load_vectors(&config.vectors_path, config.dimension, workers)?;
        let stopwords = match &config.stopwords_path {
            Some(path) => load_stopwords(path)?,
            None => Default::default(),
        };

        let catalog = Catalog::builder()
            .with_stopwords(stopwords)
            .with_fallback_word(config.fallback_word.as_str())
            .with_workers(workers)
            .build(rows);

        if !catalog.contains(&config.fallback_word) {
            return Err(CatalogError::MissingFallback {
                word: config.fallback_word.clone(),
            });
        }

        info!(
            "Catalog ready in {:?} using {} workers",
            start.elapsed(),
            workers
        );
        Ok(Self::new(catalog, config.scan_options()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn metrics(&self) -> &QueryMetrics {
        &self.metrics
    }

    fn nearest(&self) -> NearestNeighbors<'_> {
        NearestNeighbors::new(&self.catalog, self.options)
    }

    /// Every candidate ranked against `word`, excluding `word` itself
    pub fn nearest_to_word(&self, word: &str) -> Result<Vec<ScoredPair>, CatalogError> {
        self.metrics.time("nearest", || self.nearest().by_word(word))
    }

    /// The `top` candidates ranked against `word`
    pub fn top_nearest_to_word(
        &self,
        word: &str,
        top: usize,
    ) -> Result<Vec<ScoredPair>, CatalogError> {
        self.metrics
            .time("nearest", || self.nearest().top_by_word(word, top))
    }

    /// Every candidate ranked against a raw vector
    pub fn nearest_to_vector(&self, vector: &Vector) -> Vec<ScoredPair> {
        self.metrics
            .time("nearest", || self.nearest().by_vector(vector))
    }

    /// The `top` candidates ranked against a raw vector
    pub fn top_nearest_to_vector(&self, vector: &Vector, top: usize) -> Vec<ScoredPair> {
        self.metrics
            .time("nearest", || self.nearest().top_by_vector(vector, top))
    }

    /// Solve "second_is : first_is :: first_to : ?"
    pub fn analogy(
        &self,
        second_is: &str,
        first_is: &str,
        first_to: &str,
        top: usize,
    ) -> Vec<ScoredPair> {
        self.metrics.time("analogy", || {
            AnalogyResolver::new(self.nearest()).resolve(second_is, first_is, first_to, top)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const VECTORS: &str = "king,1,0\nqueen,0.9,0.1\nman,0.5,0.5\nwoman,0.4,0.6\nthe,0.3,0.3\nerror,0,0\n";

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn load(dir: &TempDir) -> Engine {
        let config = Config::default()
            .with_vectors_path(write(dir, "vectors.csv", VECTORS))
            .with_stopwords_path(Some(write(dir, "stopwords.csv", "the\n")))
            .with_dimension(Some(2))
            .with_workers(2);
        Engine::load(&config).unwrap()
    }

    #[test]
    fn test_load_and_query() {
        let dir = tempfile::tempdir().unwrap();
        let engine = load(&dir);

        assert_eq!(engine.catalog().len(), 5);
        assert!(engine.catalog().contains("the"));

        let nearest = engine.nearest_to_word("king").unwrap();
        assert_eq!(nearest.len(), 4);
        assert_eq!(nearest[0].candidate(), "queen");
        assert!(nearest.iter().all(|p| p.candidate() != "the"));

        let analogy = engine.analogy("woman", "man", "king", 1);
        assert_eq!(analogy.len(), 1);
        assert_eq!(analogy[0].candidate(), "queen");
        assert!((analogy[0].score() - 1.0).abs() < 1e-9);

        let stats = engine.metrics();
        assert_eq!(stats.total_queries(), 2);
        assert_eq!(stats.stats("analogy").unwrap().count, 1);
    }

    #[test]
    fn test_top_queries() {
        let dir = tempfile::tempdir().unwrap();
        let engine = load(&dir);

        let top = engine.top_nearest_to_word("king", 2).unwrap();
        assert_eq!(top.len(), 2);

        let by_vector = engine.top_nearest_to_vector(&Vector::new(vec![1.0, 0.0]), 1);
        assert_eq!(by_vector.len(), 1);
        assert_eq!(by_vector[0].candidate(), "queen");

        let all = engine.nearest_to_vector(&Vector::new(vec![1.0, 0.0]));
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_load_requires_fallback_word() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default()
            .with_vectors_path(write(&dir, "vectors.csv", "king,1,0\n"))
            .with_stopwords_path(None);

        assert!(matches!(
            Engine::load(&config),
            Err(CatalogError::MissingFallback { .. })
        ));
    }

    #[test]
    fn test_load_reports_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default()
            .with_vectors_path(dir.path().join("missing.csv"))
            .with_stopwords_path(None);

        assert!(matches!(
            Engine::load(&config),
            Err(CatalogError::Source(_))
        ));
    }
}
