//! Result Presentation
//!
//! Text rendering for neighbor and analogy results.

use std::fmt::Write;

use crate::ranking::ScoredPair;

const BANNER: &str = "=============================";

/// Render the `top` nearest words of a neighbor query
pub fn render_nearest(results: &[ScoredPair], top: usize) -> String {
    let Some(first) = results.first() else {
        return "The specified word doesn't exist in the vocabulary.\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "============{}============", first.query);
    let _ = writeln!(out, "The nearest words are:");
    for pair in results.iter().take(top) {
        let _ = writeln!(out, "{},{:.5}", pair.candidate(), pair.score());
    }
    out
}

/// Render an analogy answer: the best match followed by the alternatives
pub fn render_analogy(
    second_is: &str,
    first_is: &str,
    first_to: &str,
    results: &[ScoredPair],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", BANNER);
    let _ = writeln!(
        out,
        "Identifying the logical analogies of {} (use {} and {} as a reference).",
        second_is, first_is, first_to
    );

    match results.split_first() {
        Some((best, others)) => {
            let _ = writeln!(
                out,
                "{} is to {} as {} is to {}.",
                first_is,
                first_to,
                second_is,
                best.candidate()
            );
            let _ = writeln!(out, "Other options include:");
            for pair in others {
                let _ = writeln!(out, "{}, {}", pair.candidate(), pair.score());
            }
        }
        None => {
            let _ = writeln!(out, "No analogy found: a reference word is not in the vocabulary.");
        }
    }

    let _ = writeln!(out, "{}", BANNER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::QueryIdentity;

    fn pair(query: &str, candidate: &str, score: f64) -> ScoredPair {
        ScoredPair::new(QueryIdentity::Word(query.into()), candidate.into(), score)
    }

    #[test]
    fn test_render_nearest() {
        let results = vec![
            pair("computer", "software", 0.912345678),
            pair("computer", "hardware", 0.8),
            pair("computer", "desk", 0.1),
        ];
        let text = render_nearest(&results, 2);
        assert_eq!(
            text,
            "============computer============\n\
             The nearest words are:\n\
             software,0.91235\n\
             hardware,0.80000\n"
        );
    }

    #[test]
    fn test_render_nearest_clamps_top() {
        let results = vec![pair("a", "b", 0.5)];
        let text = render_nearest(&results, 10);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_render_nearest_empty() {
        assert_eq!(
            render_nearest(&[], 5),
            "The specified word doesn't exist in the vocabulary.\n"
        );
    }

    #[test]
    fn test_render_analogy() {
        let results = vec![pair("x", "queen", 0.75), pair("x", "princess", 0.5)];
        let text = render_analogy("woman", "man", "king", &results);
        assert!(text.contains("Identifying the logical analogies of woman (use man and king as a reference)."));
        assert!(text.contains("man is to king as woman is to queen."));
        assert!(text.contains("Other options include:\nprincess, 0.5\n"));
        assert!(text.starts_with(BANNER));
        assert!(text.trim_end().ends_with(BANNER));
    }

    #[test]
    fn test_render_analogy_empty() {
        let text = render_analogy("woman", "man", "emperor", &[]);
        assert!(text.contains("No analogy found"));
        assert!(!text.contains("Other options"));
    }
}
