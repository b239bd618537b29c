//! Word Catalog
//!
//! The read-only set of word vectors every query runs against.
//!
//! A catalog keeps two views over its source rows:
//! - the vocabulary: every distinct source word, used for membership tests
//!   and vector lookup (stopwords included)
//! - the candidates: vocabulary entries that are not stopwords, in source
//!   order, used as ranking candidates

mod source;

pub use source::{load_stopwords, load_vectors, SourceRow};

use hashbrown::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::CatalogError;
use crate::parallel::map_partitioned;
use crate::vector::Vector;

/// Default name of the word whose vector stands in for unknown words
pub const FALLBACK_WORD: &str = "error";

/// A word and its vector
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub word: Arc<str>,
    pub vector: Arc<Vector>,
}

impl CatalogEntry {
    pub fn new(word: impl Into<Arc<str>>, vector: Vector) -> Self {
        Self {
            word: word.into(),
            vector: Arc::new(vector),
        }
    }
}

/// Immutable word-vector catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Word -> vector for every distinct source word
    vocabulary: HashMap<Arc<str>, Arc<Vector>>,
    /// Non-stopword entries in source order
    candidates: Vec<CatalogEntry>,
    fallback_word: String,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog without stopwords or parallelism
    pub fn from_rows(rows: Vec<SourceRow>) -> Self {
        Self::builder().build(rows)
    }

    /// Whether `word` is in the vocabulary
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains_key(word)
    }

    /// Vector for `word`, if it is in the vocabulary
    pub fn vector(&self, word: &str) -> Option<&Vector> {
        self.vocabulary.get(word).map(|v| v.as_ref())
    }

    /// Vector for `word`, substituting the fallback word's vector when
    /// `word` is unknown
    pub fn vector_or_fallback(&self, word: &str) -> Result<&Vector, CatalogError> {
        if let Some(vector) = self.vector(word) {
            return Ok(vector);
        }

        warn!(
            "Unknown word '{}', using vector of '{}'",
            word, self.fallback_word
        );
        self.vector(&self.fallback_word)
            .ok_or_else(|| CatalogError::MissingFallback {
                word: self.fallback_word.clone(),
            })
    }

    /// Ranking candidates in source order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.candidates
    }

    /// Number of ranking candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of distinct vocabulary words, stopwords included
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn fallback_word(&self) -> &str {
        &self.fallback_word
    }
}

/// Builds a [`Catalog`] from source rows
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    stopwords: HashSet<String>,
    fallback_word: String,
    workers: usize,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            stopwords: HashSet::new(),
            fallback_word: FALLBACK_WORD.to_string(),
            workers: 1,
        }
    }
}

impl CatalogBuilder {
    pub fn with_stopwords(mut self, stopwords: HashSet<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_fallback_word(mut self, word: impl Into<String>) -> Self {
        self.fallback_word = word.into();
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Build the catalog
    ///
    /// Entries are constructed in parallel, one independent partition per
    /// worker, then merged in source order. A repeated word keeps its first
    /// row.
    pub fn build(self, rows: Vec<SourceRow>) -> Catalog {
        let stopwords = &self.stopwords;
        let built = map_partitioned(&rows, self.workers, |row| {
            let entry = CatalogEntry::new(row.word.as_str(), Vector::new(row.values.clone()));
            let is_stopword = stopwords.contains(row.word.as_str());
            (entry, is_stopword)
        });
        drop(rows);

        let mut vocabulary = HashMap::with_capacity(built.len());
        let mut candidates = Vec::with_capacity(built.len());
        let mut duplicates = 0usize;
        let mut skipped = 0usize;

        for (entry, is_stopword) in built {
            if vocabulary.contains_key(&entry.word) {
                duplicates += 1;
                warn!("Duplicate word '{}' ignored", entry.word);
                continue;
            }
            vocabulary.insert(entry.word.clone(), entry.vector.clone());

            if is_stopword {
                skipped += 1;
            } else {
                candidates.push(entry);
            }
        }

        info!(
            "Built catalog: {} words, {} candidates, {} stopwords skipped, {} duplicates",
            vocabulary.len(),
            candidates.len(),
            skipped,
            duplicates
        );

        Catalog {
            vocabulary,
            candidates,
            fallback_word: self.fallback_word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<SourceRow> {
        vec![
            SourceRow::new("king", vec![1.0, 0.0]),
            SourceRow::new("the", vec![0.2, 0.2]),
            SourceRow::new("queen", vec![0.9, 0.1]),
            SourceRow::new("error", vec![0.0, 0.0]),
        ]
    }

    fn stopwords() -> HashSet<String> {
        ["the".to_string()].into_iter().collect()
    }

    #[test]
    fn test_build_filters_stopwords_from_candidates() {
        let catalog = Catalog::builder().with_stopwords(stopwords()).build(rows());

        let words: Vec<&str> = catalog.entries().iter().map(|e| e.word.as_ref()).collect();
        assert_eq!(words, vec!["king", "queen", "error"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.vocabulary_len(), 4);

        // Stopwords stay in the vocabulary
        assert!(catalog.contains("the"));
        assert_eq!(catalog.vector("the"), Some(&Vector::new(vec![0.2, 0.2])));
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let many: Vec<SourceRow> = (0..500)
            .map(|i| SourceRow::new(format!("w{}", i), vec![i as f64, 1.0]))
            .collect();

        let sequential = Catalog::from_rows(many.clone());
        let parallel = Catalog::builder().with_workers(8).build(many);

        assert_eq!(sequential.entries(), parallel.entries());
        assert_eq!(parallel.vocabulary_len(), 500);
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let catalog = Catalog::from_rows(vec![
            SourceRow::new("dup", vec![1.0]),
            SourceRow::new("dup", vec![2.0]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.vector("dup"), Some(&Vector::new(vec![1.0])));
    }

    #[test]
    fn test_lookup_with_fallback() {
        let catalog = Catalog::from_rows(rows());

        let known = catalog.vector_or_fallback("king").unwrap();
        assert_eq!(known, &Vector::new(vec![1.0, 0.0]));

        let unknown = catalog.vector_or_fallback("zebra").unwrap();
        assert_eq!(unknown, &Vector::new(vec![0.0, 0.0]));
    }

    #[test]
    fn test_missing_fallback_is_error() {
        let catalog = Catalog::builder()
            .with_fallback_word("sentinel")
            .build(rows());

        match catalog.vector_or_fallback("zebra") {
            Err(CatalogError::MissingFallback { word }) => assert_eq!(word, "sentinel"),
            other => panic!("expected missing fallback, got {:?}", other),
        }
        assert_eq!(catalog.fallback_word(), "sentinel");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_rows(Vec::new());
        assert!(catalog.is_empty());
        assert!(!catalog.contains("error"));
    }
}
