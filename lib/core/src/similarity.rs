//! Cosine similarity heuristic used when no learned model can score a pair.
//!
//! The raw cosine `s ∈ [-1, 1]` is mapped to a probability `(s + 1) / 2`.

use crate::{Error, FeatureVector, Result};

/// Probability returned when either vector has zero norm.
pub const ZERO_NORM_PROBABILITY: f64 = 0.5;

/// Cosine similarity between two vectors
///
/// # Returns
/// Similarity in [-1.0, 1.0], or `None` when either norm is zero.
///
/// # Errors
/// `Error::InvalidDimension` if the vectors differ in length.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> Result<Option<f64>> {
    if a.dim() != b.dim() {
        return Err(Error::InvalidDimension {
            expected: a.dim(),
            actual: b.dim(),
        });
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(None);
    }

    Ok(Some((a.dot(b) / (norm_a * norm_b)).clamp(-1.0, 1.0)))
}

/// Interaction probability from the geometric heuristic
///
/// # Returns
/// Probability in [0.0, 1.0]; exactly 0.5 if either vector is all zeros.
///
/// # Errors
/// `Error::InvalidDimension` if the vectors differ in length.
pub fn score(a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
    Ok(match cosine_similarity(a, b)? {
        Some(s) => (s + 1.0) / 2.0,
        None => ZERO_NORM_PROBABILITY,
    })
}
