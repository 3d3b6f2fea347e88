//! Logic Module - Classification Pipeline
//!
//! - `features/` - Evidence layout and encoding
//! - `dataset/` - CSV loading and train/test split
//! - `model/` - Classifier trait and nearest neighbors
//! - `evaluation` / `report` - Scoring and console output

pub mod dataset;
pub mod evaluation;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod report;
