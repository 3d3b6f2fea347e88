//! Classifier Trait
//!
//! Minimal fit/predict contract over an `n x d` evidence matrix.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::logic::dataset::Label;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("predict called before fit")]
    NotFitted,

    #[error("evidence has {actual} features, model was fitted on {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{evidence} evidence rows but {labels} labels")]
    LengthMismatch { evidence: usize, labels: usize },

    #[error("cannot fit on an empty training set")]
    EmptyTrainingSet,

    #[error("neighbor count {neighbors} is invalid for {rows} training rows")]
    InvalidNeighbors { neighbors: usize, rows: usize },

    #[error("{labels} labels but {predictions} predictions")]
    PredictionMismatch { labels: usize, predictions: usize },
}

// ============================================================================
// STATUS
// ============================================================================

/// Model status for logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub model_name: String,
    pub fitted: bool,
    pub training_rows: usize,
    pub features: usize,
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Trait for trainable classifiers
pub trait Classifier {
    /// Fit on training evidence (one row per sample). Replaces any prior fit.
    fn fit(&mut self, evidence: &Array2<f64>, labels: &[Label]) -> Result<(), ModelError>;

    /// One predicted label per evidence row, in row order
    fn predict(&self, evidence: &Array2<f64>) -> Result<Vec<Label>, ModelError>;

    fn is_fitted(&self) -> bool;

    fn status(&self) -> ModelStatus;

    fn name(&self) -> &str {
        "classifier"
    }
}
