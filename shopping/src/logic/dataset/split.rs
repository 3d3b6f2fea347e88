//! Train/Test Split
//!
//! Randomly partitions evidence and labels into disjoint train and test sets.
//! Pass a seed for a reproducible split; without one the generator is seeded
//! from OS entropy and every run differs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::logic::dataset::record::Label;
use crate::logic::features::FeatureVector;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    #[error("test size must be strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    #[error("{context}: {evidence} evidence vectors but {labels} labels")]
    LengthMismatch {
        context: &'static str,
        evidence: usize,
        labels: usize,
    },

    #[error("cannot split {rows} rows into non-empty train and test sets (test size {test_size})")]
    NotEnoughRows { rows: usize, test_size: f64 },
}

/// Result of a split. Each partition keeps evidence and labels paired by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train_evidence: Vec<FeatureVector>,
    pub test_evidence: Vec<FeatureVector>,
    pub train_labels: Vec<Label>,
    pub test_labels: Vec<Label>,
}

impl Split {
    pub fn train_len(&self) -> usize {
        self.train_labels.len()
    }

    pub fn test_len(&self) -> usize {
        self.test_labels.len()
    }

    fn check_pairing(&self) -> Result<(), SplitError> {
        check_lengths("train partition", self.train_evidence.len(), self.train_labels.len())?;
        check_lengths("test partition", self.test_evidence.len(), self.test_labels.len())
    }
}

/// Number of test rows for `rows` rows: `ceil(test_size * rows)`
pub fn test_count(rows: usize, test_size: f64) -> usize {
    (test_size * rows as f64).ceil() as usize
}

/// Split evidence and labels, holding out `test_size` of the rows for testing
pub fn train_test_split(
    evidence: &[FeatureVector],
    labels: &[Label],
    test_size: f64,
    seed: Option<u64>,
) -> Result<Split, SplitError> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(SplitError::InvalidTestSize(test_size));
    }
    check_lengths("input", evidence.len(), labels.len())?;

    let rows = labels.len();
    let n_test = test_count(rows, test_size);
    if n_test == 0 || n_test >= rows {
        return Err(SplitError::NotEnoughRows { rows, test_size });
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut order: Vec<usize> = (0..rows).collect();
    order.shuffle(&mut rng);

    let (test_idx, train_idx) = order.split_at(n_test);
    let split = Split {
        train_evidence: train_idx.iter().map(|&i| evidence[i].clone()).collect(),
        test_evidence: test_idx.iter().map(|&i| evidence[i].clone()).collect(),
        train_labels: train_idx.iter().map(|&i| labels[i]).collect(),
        test_labels: test_idx.iter().map(|&i| labels[i]).collect(),
    };
    split.check_pairing()?;

    log::info!(
        "Split {} rows into {} train / {} test (seed: {:?})",
        rows,
        split.train_len(),
        split.test_len(),
        seed
    );
    Ok(split)
}

fn check_lengths(context: &'static str, evidence: usize, labels: usize) -> Result<(), SplitError> {
    if evidence != labels {
        return Err(SplitError::LengthMismatch { context, evidence, labels });
    }
    Ok(())
}
