//! k-Nearest Neighbors Classifier
//!
//! Euclidean distance over raw feature values. Categorical codes are treated
//! as ordinary coordinates. Distance ties resolve to the earlier training row.

use ndarray::{Array2, ArrayView1, Axis};

use super::classifier::{Classifier, ModelError, ModelStatus};
use crate::logic::dataset::Label;

/// Default neighbor count
pub const DEFAULT_NEIGHBORS: usize = 1;

/// Fitted training data
#[derive(Debug, Clone)]
struct FittedData {
    evidence: Array2<f64>,
    labels: Vec<Label>,
}

#[derive(Debug, Clone)]
pub struct KNeighborsClassifier {
    neighbors: usize,
    fitted: Option<FittedData>,
}

impl KNeighborsClassifier {
    pub fn new(neighbors: usize) -> Self {
        Self {
            neighbors,
            fitted: None,
        }
    }

    /// Training row indices ordered by distance to `point`, nearest first
    fn ranked(&self, data: &FittedData, point: ArrayView1<f64>) -> Vec<usize> {
        let distances = (&data.evidence - &point)
            .mapv(|d| d * d)
            .sum_axis(Axis(1));

        let mut order: Vec<usize> = (0..distances.len()).collect();
        // Stable sort keeps training order among equal distances
        order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
        order
    }

    /// Majority label among the nearest rows; ties go to the label seen first
    fn vote(&self, data: &FittedData, nearest: &[usize]) -> Label {
        let mut counts: Vec<(Label, usize)> = Vec::new();
        for &i in nearest {
            let label = data.labels[i];
            match counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label, 1)),
            }
        }

        let mut best = counts[0];
        for &candidate in &counts[1..] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        best.0
    }
}

impl Default for KNeighborsClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_NEIGHBORS)
    }
}

impl Classifier for KNeighborsClassifier {
    fn fit(&mut self, evidence: &Array2<f64>, labels: &[Label]) -> Result<(), ModelError> {
        // A failed refit leaves the model unfitted
        self.fitted = None;

        let rows = evidence.nrows();
        if rows != labels.len() {
            return Err(ModelError::LengthMismatch {
                evidence: rows,
                labels: labels.len(),
            });
        }
        if rows == 0 {
            return Err(ModelError::EmptyTrainingSet);
        }
        if self.neighbors == 0 || self.neighbors > rows {
            return Err(ModelError::InvalidNeighbors {
                neighbors: self.neighbors,
                rows,
            });
        }

        self.fitted = Some(FittedData {
            evidence: evidence.to_owned(),
            labels: labels.to_vec(),
        });

        log::info!(
            "Fitted {}-nearest-neighbor model on {} rows x {} features",
            self.neighbors,
            rows,
            evidence.ncols()
        );
        Ok(())
    }

    fn predict(&self, evidence: &Array2<f64>) -> Result<Vec<Label>, ModelError> {
        let data = self.fitted.as_ref().ok_or(ModelError::NotFitted)?;

        let expected = data.evidence.ncols();
        if evidence.ncols() != expected {
            return Err(ModelError::DimensionMismatch {
                expected,
                actual: evidence.ncols(),
            });
        }

        let predictions = evidence
            .rows()
            .into_iter()
            .map(|point| {
                let order = self.ranked(data, point);
                self.vote(data, &order[..self.neighbors])
            })
            .collect();

        Ok(predictions)
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn status(&self) -> ModelStatus {
        let (training_rows, features) = self
            .fitted
            .as_ref()
            .map(|d| (d.evidence.nrows(), d.evidence.ncols()))
            .unwrap_or((0, 0));

        ModelStatus {
            model_name: self.name().to_string(),
            fitted: self.is_fitted(),
            training_rows,
            features,
        }
    }

    fn name(&self) -> &str {
        "k-nearest-neighbors"
    }
}
