//! Nearest-Neighbor Query
//!
//! Scores every catalog candidate against a query and ranks the results.

use std::sync::Arc;
use tracing::debug;

use super::ScanOptions;
use crate::catalog::{Catalog, CatalogEntry};
use crate::error::CatalogError;
use crate::parallel::filter_map_partitioned;
use crate::ranking::{rank_top, QueryIdentity, ScoredPair};
use crate::vector::Vector;

/// Exhaustive cosine-similarity search over a catalog
#[derive(Debug, Clone, Copy)]
pub struct NearestNeighbors<'a> {
    catalog: &'a Catalog,
    options: ScanOptions,
}

impl<'a> NearestNeighbors<'a> {
    pub fn new(catalog: &'a Catalog, options: ScanOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Every candidate except `word` itself, most similar first
    ///
    /// Unknown words are resolved through the catalog fallback vector.
    pub fn by_word(&self, word: &str) -> Result<Vec<ScoredPair>, CatalogError> {
        self.top_by_word(word, usize::MAX)
    }

    /// The `limit` best candidates for `word`
    pub fn top_by_word(&self, word: &str, limit: usize) -> Result<Vec<ScoredPair>, CatalogError> {
        if self.catalog.is_empty() {
            return Ok(Vec::new());
        }

        let query = self.catalog.vector_or_fallback(word)?;
        let identity = QueryIdentity::Word(Arc::from(word));

        let pairs = self.score(|entry| {
            (entry.word.as_ref() != word).then(|| {
                ScoredPair::new(
                    identity.clone(),
                    entry.word.clone(),
                    query.cosine_similarity(&entry.vector),
                )
            })
        });

        debug!("Scored {} candidates for word '{}'", pairs.len(), word);
        Ok(rank_top(pairs, limit))
    }

    /// Every candidate whose vector differs from `query`, most similar first
    pub fn by_vector(&self, query: &Vector) -> Vec<ScoredPair> {
        self.top_by_vector(query, usize::MAX)
    }

    /// The `limit` best candidates for `query`
    pub fn top_by_vector(&self, query: &Vector, limit: usize) -> Vec<ScoredPair> {
        let shared = Arc::new(query.clone());
        let identity = QueryIdentity::Vector(shared.clone());

        let pairs = self.score(|entry| {
            (*entry.vector != *shared).then(|| {
                ScoredPair::new(
                    identity.clone(),
                    entry.word.clone(),
                    shared.cosine_similarity(&entry.vector),
                )
            })
        });

        debug!("Scored {} candidates for a raw vector", pairs.len());
        rank_top(pairs, limit)
    }

    /// Score candidates, sharding across workers for large catalogs
    fn score<F>(&self, f: F) -> Vec<ScoredPair>
    where
        F: Fn(&CatalogEntry) -> Option<ScoredPair> + Sync,
    {
        let entries = self.catalog.entries();
        let workers = if entries.len() >= self.options.parallel_threshold {
            self.options.workers
        } else {
            1
        };
        filter_map_partitioned(entries, workers, f)
    }
}
