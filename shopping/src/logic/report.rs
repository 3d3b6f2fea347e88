//! Console report

use std::fmt;

use crate::logic::evaluation::Evaluation;

/// Result summary printed after a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub correct: usize,
    pub incorrect: usize,
    pub sensitivity: f64,
    pub specificity: f64,
}

impl Report {
    pub fn new(correct: usize, incorrect: usize, sensitivity: f64, specificity: f64) -> Self {
        Self {
            correct,
            incorrect,
            sensitivity,
            specificity,
        }
    }
}

impl From<&Evaluation> for Report {
    fn from(eval: &Evaluation) -> Self {
        Self::new(eval.correct, eval.incorrect, eval.sensitivity(), eval.specificity())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct: {}", self.correct)?;
        writeln!(f, "Incorrect: {}", self.incorrect)?;
        writeln!(f, "True Positive Rate: {:.2}%", 100.0 * self.sensitivity)?;
        write!(f, "True Negative Rate: {:.2}%", 100.0 * self.specificity)
    }
}
