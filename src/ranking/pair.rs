//! Scored Pairs
//!
//! One comparison between a query and a candidate word.

use std::fmt;
use std::sync::Arc;

use crate::vector::Vector;

/// What a result was compared against
#[derive(Debug, Clone, PartialEq)]
pub enum QueryIdentity {
    /// A vocabulary word (possibly resolved through the fallback vector)
    Word(Arc<str>),
    /// A raw vector, e.g. the target of an analogy
    Vector(Arc<Vector>),
}

impl fmt::Display for QueryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryIdentity::Word(word) => f.write_str(word),
            QueryIdentity::Vector(vector) => write!(f, "[{}]", vector),
        }
    }
}

/// A ranked comparison result
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPair {
    /// Query side of the comparison
    pub query: QueryIdentity,
    /// Candidate word from the catalog
    pub candidate: Arc<str>,
    /// Cosine similarity; NaN when undefined
    pub score: f64,
}

impl ScoredPair {
    pub fn new(query: QueryIdentity, candidate: Arc<str>, score: f64) -> Self {
        Self {
            query,
            candidate,
            score,
        }
    }

    /// Query word, when the query was a word
    pub fn query_word(&self) -> Option<&str> {
        match &self.query {
            QueryIdentity::Word(word) => Some(word.as_ref()),
            QueryIdentity::Vector(_) => None,
        }
    }

    /// Query vector, when the query was a raw vector
    pub fn query_vector(&self) -> Option<&Vector> {
        match &self.query {
            QueryIdentity::Vector(vector) => Some(vector.as_ref()),
            QueryIdentity::Word(_) => None,
        }
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
