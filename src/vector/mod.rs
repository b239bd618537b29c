//! Vector Module
//!
//! Word vectors and the similarity arithmetic behind every query.

mod dense;
mod similarity;

pub use dense::{Vector, OUT_OF_RANGE, PAD_VALUE};
pub use similarity::{cosine_similarity, dot_product, magnitude};
