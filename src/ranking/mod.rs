//! Similarity Ranking
//!
//! Orders scored pairs by descending score with a binary heap sort.
//!
//! Ordering rules:
//! - higher scores first
//! - NaN scores after every numeric score
//! - equal scores (and NaNs among themselves) keep their input order

mod heap;
mod pair;

pub use heap::{heap_select_by, heap_sort_by};
pub use pair::{QueryIdentity, ScoredPair};

use std::cmp::Ordering;

/// A pair tagged with its input position for tie-breaking
struct Slot {
    position: usize,
    pair: ScoredPair,
}

/// Sort every pair by descending score
pub fn rank(pairs: Vec<ScoredPair>) -> Vec<ScoredPair> {
    rank_top(pairs, usize::MAX)
}

/// The first `limit` pairs [`rank`] would return
///
/// Only `limit` heap extractions are performed.
pub fn rank_top(pairs: Vec<ScoredPair>, limit: usize) -> Vec<ScoredPair> {
    let mut slots: Vec<Slot> = pairs
        .into_iter()
        .enumerate()
        .map(|(position, pair)| Slot { position, pair })
        .collect();

    let keep = limit.min(slots.len());
    heap_select_by(&mut slots, keep, ranking_key);

    // The heap leaves the best pairs ascending at the tail.
    let start = slots.len() - keep;
    slots.drain(start..).rev().map(|slot| slot.pair).collect()
}

/// Ascending order of "how good": score, then earlier input wins ties
fn ranking_key(a: &Slot, b: &Slot) -> Ordering {
    compare_scores(a.pair.score, b.pair.score).then_with(|| b.position.cmp(&a.position))
}

/// Total order over scores with NaN below every number
fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(candidate: &str, score: f64) -> ScoredPair {
        ScoredPair::new(QueryIdentity::Word("query".into()), candidate.into(), score)
    }

    fn candidates(pairs: &[ScoredPair]) -> Vec<&str> {
        pairs.iter().map(|p| p.candidate()).collect()
    }

    fn is_descending(pairs: &[ScoredPair]) -> bool {
        pairs
            .windows(2)
            .all(|w| compare_scores(w[0].score, w[1].score) != Ordering::Less)
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![
            pair("a", 0.1),
            pair("b", 0.9),
            pair("c", -0.4),
            pair("d", 0.5),
        ]);
        assert_eq!(candidates(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rank_empty_and_single() {
        assert!(rank(Vec::new()).is_empty());
        let ranked = rank(vec![pair("only", 0.3)]);
        assert_eq!(candidates(&ranked), vec!["only"]);
    }

    #[test]
    fn test_rank_is_permutation() {
        let mut state = 17u64;
        let input: Vec<ScoredPair> = (0..500)
            .map(|i| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                let score = ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0;
                pair(&format!("w{}", i), score)
            })
            .collect();

        let ranked = rank(input.clone());
        assert_eq!(ranked.len(), input.len());
        assert!(is_descending(&ranked));

        let mut before = candidates(&input);
        let mut after = candidates(&ranked);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(vec![
            pair("first", 0.5),
            pair("top", 0.7),
            pair("second", 0.5),
            pair("third", 0.5),
        ]);
        assert_eq!(candidates(&ranked), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_nan_ranked_last_in_input_order() {
        let ranked = rank(vec![
            pair("nan1", f64::NAN),
            pair("low", -1.0),
            pair("nan2", f64::NAN),
            pair("high", 1.0),
        ]);
        assert_eq!(candidates(&ranked), vec!["high", "low", "nan1", "nan2"]);
        assert!(ranked[2].score.is_nan());
        assert!(ranked[3].score.is_nan());
    }

    #[test]
    fn test_infinities_and_nan() {
        let ranked = rank(vec![
            pair("nan", f64::NAN),
            pair("neg_inf", f64::NEG_INFINITY),
            pair("inf", f64::INFINITY),
        ]);
        assert_eq!(candidates(&ranked), vec!["inf", "neg_inf", "nan"]);
    }

    #[test]
    fn test_rank_top_matches_prefix() {
        let input: Vec<ScoredPair> = (0..50)
            .map(|i| pair(&format!("w{}", i), ((i * 37) % 11) as f64 / 10.0))
            .collect();

        let full = rank(input.clone());
        for limit in [0, 1, 5, 49, 50, 80] {
            let top = rank_top(input.clone(), limit);
            let expected = &full[..limit.min(full.len())];
            assert_eq!(candidates(&top), candidates(expected), "limit {}", limit);
        }
    }
}
