//! Dataset Module - Session Evidence and Labels
//!
//! Loads session records from CSV and holds them as two parallel sequences:
//! `evidence[i]` and `labels[i]` always describe the same session.

pub mod loader;
pub mod record;
pub mod split;


pub use loader::load_data;
pub use record::{Label, SessionRecord, NEGATIVE, POSITIVE};
pub use split::{train_test_split, Split, SplitError};

use crate::logic::features::FeatureVector;

/// Evidence vectors with their labels, paired by index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    evidence: Vec<FeatureVector>,
    labels: Vec<Label>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one session. Evidence and label are always added together.
    pub fn push(&mut self, evidence: FeatureVector, label: Label) {
        self.evidence.push(evidence);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn evidence(&self) -> &[FeatureVector] {
        &self.evidence
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of sessions labelled as a purchase
    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l == POSITIVE).count()
    }
}
