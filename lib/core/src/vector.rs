use serde::{Deserialize, Serialize};

/// A drug embedding: fixed-length, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: Vec<f32>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Dot product accumulated in f64. Callers check dimensions first.
    #[inline]
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f64::from(*a) * f64::from(*b))
            .sum()
    }

    /// Euclidean norm, accumulated in f64
    #[inline]
    pub fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|x| f64::from(*x) * f64::from(*x))
            .sum::<f64>()
            .sqrt()
    }

    /// Pair input for a learned model: `self` followed by `other`, length `2 * dim`.
    #[must_use]
    pub fn concat(&self, other: &FeatureVector) -> Vec<f32> {
        let mut combined = Vec::with_capacity(self.dim() + other.dim());
        combined.extend_from_slice(&self.data);
        combined.extend_from_slice(&other.data);
        combined
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_norm() {
        let v1 = FeatureVector::new(vec![3.0, 4.0]);
        let v2 = FeatureVector::new(vec![1.0, 0.0]);
        assert!((v1.norm() - 5.0).abs() < 1e-12);
        assert!((v1.dot(&v2) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_concat_keeps_order() {
        let a = FeatureVector::new(vec![1.0, 2.0]);
        let b = FeatureVector::new(vec![3.0, 4.0]);
        assert_eq!(a.concat(&b), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.concat(&a), vec![3.0, 4.0, 1.0, 2.0]);
    }
}
