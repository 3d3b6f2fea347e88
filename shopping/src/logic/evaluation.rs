//! Evaluation - sensitivity and specificity
//!
//! A rate whose denominator is zero (no actual positives, or no actual
//! negatives) is reported as 0, never NaN and never an error.

use serde::{Deserialize, Serialize};

use crate::logic::dataset::{Label, NEGATIVE, POSITIVE};
use crate::logic::model::ModelError;

/// Compute `(sensitivity, specificity)` from positionally paired labels.
///
/// Pairs beyond the shorter of the two slices are ignored. The pipeline also
/// needs correct/incorrect counts and scores through [`Evaluation`] instead.
#[allow(dead_code)]
pub fn evaluate(labels: &[Label], predictions: &[Label]) -> (f64, f64) {
    let counts = Evaluation::count(labels, predictions);
    (counts.sensitivity(), counts.specificity())
}

/// Confusion counts for a binary labelling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub true_positive: usize,
    pub true_negative: usize,
    pub total_positive: usize,
    pub total_negative: usize,
    pub correct: usize,
    pub incorrect: usize,
}

impl Evaluation {
    /// Build from equal-length label and prediction sequences
    pub fn new(labels: &[Label], predictions: &[Label]) -> Result<Self, ModelError> {
        if labels.len() != predictions.len() {
            return Err(ModelError::PredictionMismatch {
                labels: labels.len(),
                predictions: predictions.len(),
            });
        }
        Ok(Self::count(labels, predictions))
    }

    fn count(labels: &[Label], predictions: &[Label]) -> Self {
        let mut eval = Self::default();

        for (&actual, &predicted) in labels.iter().zip(predictions) {
            match actual {
                POSITIVE => {
                    eval.total_positive += 1;
                    if predicted == POSITIVE {
                        eval.true_positive += 1;
                    }
                }
                NEGATIVE => {
                    eval.total_negative += 1;
                    if predicted == NEGATIVE {
                        eval.true_negative += 1;
                    }
                }
                _ => {}
            }

            if actual == predicted {
                eval.correct += 1;
            } else {
                eval.incorrect += 1;
            }
        }

        eval
    }

    /// True positive rate, 0 when there are no actual positives
    pub fn sensitivity(&self) -> f64 {
        ratio(self.true_positive, self.total_positive)
    }

    /// True negative rate, 0 when there are no actual negatives
    pub fn specificity(&self) -> f64 {
        ratio(self.true_negative, self.total_negative)
    }
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total > 0 {
        hits as f64 / total as f64
    } else {
        0.0
    }
}
