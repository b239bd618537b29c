//! Analogy Resolution
//!
//! Solves "second_is : first_is :: first_to : ?" with vector arithmetic:
//! `target = v(second_is) - v(first_is) + v(first_to)`, then ranks the
//! catalog against the target.

use tracing::debug;

use super::nearest::NearestNeighbors;
use crate::ranking::ScoredPair;

/// Word analogy solver on top of a nearest-neighbor search
#[derive(Debug, Clone, Copy)]
pub struct AnalogyResolver<'a> {
    nearest: NearestNeighbors<'a>,
}

impl<'a> AnalogyResolver<'a> {
    pub fn new(nearest: NearestNeighbors<'a>) -> Self {
        Self { nearest }
    }

    /// Up to `top` best answers, most similar first
    ///
    /// Returns an empty list when `top` is zero or any reference word is
    /// missing from the vocabulary. The reference words never appear in the
    /// answer.
    pub fn resolve(
        &self,
        second_is: &str,
        first_is: &str,
        first_to: &str,
        top: usize,
    ) -> Vec<ScoredPair> {
        let references = [second_is, first_is, first_to];
        if top == 0 {
            return Vec::new();
        }

        let catalog = self.nearest.catalog();
        let (Some(second), Some(first), Some(to)) = (
            catalog.vector(second_is),
            catalog.vector(first_is),
            catalog.vector(first_to),
        ) else {
            debug!("Analogy skipped, reference words missing: {:?}", references);
            return Vec::new();
        };

        let target = second.subtract(first).add(to);

        self.nearest
            .by_vector(&target)
            .into_iter()
            .filter(|pair| !references.contains(&pair.candidate()))
            .take(top)
            .collect()
    }
}
