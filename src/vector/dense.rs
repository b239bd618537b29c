//! Dense Word Vector
//!
//! Fixed-length numeric buffer with length-reconciling arithmetic.
//!
//! Pairwise operations never fail on mismatched lengths: the shorter operand
//! is padded up to the longer one with [`PAD_VALUE`]. A padded position cannot
//! be told apart from a genuine `-1.0` except by where it sits, and padding
//! does shift similarity scores for mismatched inputs.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::similarity;
use crate::error::ParseVectorError;

/// Returned by [`Vector::get`] for an out-of-range index.
pub const OUT_OF_RANGE: f64 = -1.0;

/// Fills the tail of a vector grown by [`Vector::resize`].
pub const PAD_VALUE: f64 = -1.0;

/// An ordered, fixed-length sequence of `f64` components
///
/// The length is fixed at construction. Arithmetic always produces a new
/// vector; [`Vector::set`] is the only in-place mutation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    elements: Box<[f64]>,
}

impl Vector {
    pub fn new(elements: Vec<f64>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }

    /// Element at `index`, or [`OUT_OF_RANGE`] when `index >= len()`
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.checked_get(index).unwrap_or(OUT_OF_RANGE)
    }

    /// Element at `index`, or `None` when out of range
    #[inline]
    pub fn checked_get(&self, index: usize) -> Option<f64> {
        self.elements.get(index).copied()
    }

    /// Write `value` at `index`
    ///
    /// An out-of-range index writes the last position instead. Empty vectors
    /// have no last position and are left untouched.
    pub fn set(&mut self, value: f64, index: usize) {
        let len = self.elements.len();
        if len == 0 {
            return;
        }
        let slot = if index < len { index } else { len - 1 };
        self.elements[slot] = value;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.elements
    }

    /// Truncate or pad to `new_len`
    ///
    /// Returns `self` borrowed when `new_len` equals the current length or is
    /// zero. Shrinking keeps the first `new_len` components; growing copies
    /// every component and fills the rest with [`PAD_VALUE`].
    pub fn resize(&self, new_len: usize) -> Cow<'_, Vector> {
        let len = self.len();
        if new_len == len || new_len == 0 {
            return Cow::Borrowed(self);
        }

        let mut elements = Vec::with_capacity(new_len);
        elements.extend_from_slice(&self.elements[..len.min(new_len)]);
        elements.resize(new_len, PAD_VALUE);
        Cow::Owned(Vector::new(elements))
    }

    /// Bring both operands to the longer of the two lengths
    fn reconcile<'a>(&'a self, other: &'a Vector) -> (Cow<'a, Vector>, Cow<'a, Vector>) {
        let len = self.len().max(other.len());
        (self.resize(len), other.resize(len))
    }

    fn zip_with(&self, other: &Vector, op: impl Fn(f64, f64) -> f64) -> Vector {
        let (lhs, rhs) = self.reconcile(other);
        lhs.elements
            .iter()
            .zip(rhs.elements.iter())
            .map(|(&a, &b)| op(a, b))
            .collect()
    }

    /// Element-wise sum over the reconciled length
    pub fn add(&self, other: &Vector) -> Vector {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference over the reconciled length
    pub fn subtract(&self, other: &Vector) -> Vector {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn dot_product(&self, other: &Vector) -> f64 {
        let (lhs, rhs) = self.reconcile(other);
        similarity::dot_product(lhs.as_slice(), rhs.as_slice())
    }

    /// Euclidean norm of this vector's own components
    pub fn magnitude(&self) -> f64 {
        similarity::magnitude(&self.elements)
    }

    /// Cosine similarity over the reconciled operands
    ///
    /// NaN when either reconciled operand has zero magnitude.
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        let (lhs, rhs) = self.reconcile(other);
        similarity::cosine_similarity(lhs.as_slice(), rhs.as_slice())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(elements: Vec<f64>) -> Self {
        Self::new(elements)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, rhs: &'b Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn sub(self, rhs: &'b Vector) -> Vector {
        self.subtract(rhs)
    }
}

/// Comma-separated components with five decimals
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{:.5}", x)?;
        }
        Ok(())
    }
}

impl FromStr for Vector {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseVectorError::Empty);
        }

        s.split(',')
            .enumerate()
            .map(|(position, token)| {
                let token = token.trim();
                token
                    .parse::<f64>()
                    .map_err(|source| ParseVectorError::InvalidComponent {
                        position,
                        token: token.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Vector::new)
    }
}
