//! Features Module - Evidence Vector Encoding
//!
//! Turns a session record into the fixed 17-value evidence vector.
//! Column order lives in `layout.rs`; nothing else hardcodes indices.

pub mod layout;
pub mod month;
pub mod vector;


// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, LABEL_COLUMN};
pub use month::month_index;
pub use vector::{evidence_matrix, FeatureVector};
