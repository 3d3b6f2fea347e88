//! Model Module - Classifier Interface and Nearest Neighbors
//!
//! The pipeline only talks to the `Classifier` trait, so the model can be
//! swapped without touching loading, splitting or evaluation.

pub mod classifier;
pub mod knn;

// Re-export common types
pub use classifier::{Classifier, ModelError, ModelStatus};
pub use knn::KNeighborsClassifier;
