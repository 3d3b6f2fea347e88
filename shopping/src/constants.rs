//! Central Configuration Constants
//!
//! Fixed run settings. The only environment override (the split seed) is
//! read in `config.rs`.

/// Fraction of rows held out for testing
pub const DEFAULT_TEST_SIZE: f64 = 0.4;

/// Neighbors consulted per prediction
pub const DEFAULT_NEIGHBORS: usize = crate::logic::model::knn::DEFAULT_NEIGHBORS;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "shopping";

// ============================================
// Environment variable names
// ============================================

pub const ENV_SEED: &str = "SHOPPING_SEED";
