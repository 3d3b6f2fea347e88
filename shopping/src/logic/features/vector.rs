//! Feature Vector - Evidence for one session
//!
//! Values are stored in `FEATURE_LAYOUT` order and stacked row by row into
//! the matrix the classifier consumes.

use ndarray::Array2;

use super::layout::FEATURE_COUNT;

/// Evidence vector for one session
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }
}

/// Stack vectors into an `n x FEATURE_COUNT` matrix, one row per vector
pub fn evidence_matrix(vectors: &[FeatureVector]) -> Array2<f64> {
    Array2::from_shape_fn((vectors.len(), FEATURE_COUNT), |(row, col)| {
        vectors[row].values[col]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_matrix_shape() {
        let mut first = [1.0; FEATURE_COUNT];
        first[16] = 5.0;
        let vectors = vec![
            FeatureVector::from_values(first),
            FeatureVector::from_values([2.0; FEATURE_COUNT]),
        ];

        let matrix = evidence_matrix(&vectors);
        assert_eq!(matrix.dim(), (2, FEATURE_COUNT));
        assert_eq!(matrix[[0, 16]], 5.0);
        assert_eq!(matrix[[0, 0]], 1.0);
        assert_eq!(matrix[[1, 0]], 2.0);
    }

    #[test]
    fn test_evidence_matrix_empty() {
        assert_eq!(evidence_matrix(&[]).dim(), (0, FEATURE_COUNT));
    }
}
