//! Pipeline - load, split, fit, predict, evaluate
//!
//! One linear pass per run. Any error aborts the run; no partial report.

use std::path::Path;

use crate::config::Config;
use crate::constants::{DEFAULT_NEIGHBORS, DEFAULT_TEST_SIZE};
use crate::error::AppResult;
use crate::logic::dataset::{load_data, train_test_split, Dataset};
use crate::logic::evaluation::Evaluation;
use crate::logic::features::evidence_matrix;
use crate::logic::model::{Classifier, KNeighborsClassifier};
use crate::logic::report::Report;

/// Run the full pipeline on the CSV file at `path`
pub fn run(path: &Path, config: &Config) -> AppResult<Report> {
    let dataset = load_data(path)?;
    if dataset.is_empty() {
        log::warn!("{} has no data rows", path.display());
    }

    let mut model = KNeighborsClassifier::new(DEFAULT_NEIGHBORS);
    evaluate_model(&mut model, &dataset, config)
}

/// Split `dataset`, fit `model` on the train part and score it on the test part
pub fn evaluate_model<C: Classifier>(
    model: &mut C,
    dataset: &Dataset,
    config: &Config,
) -> AppResult<Report> {
    let split = train_test_split(
        dataset.evidence(),
        dataset.labels(),
        DEFAULT_TEST_SIZE,
        config.seed,
    )?;

    let train = evidence_matrix(&split.train_evidence);
    model.fit(&train, &split.train_labels)?;

    let test = evidence_matrix(&split.test_evidence);
    let predictions = model.predict(&test)?;
    log::debug!(
        "Model status: {}",
        serde_json::to_string(&model.status()).unwrap_or_default()
    );

    let counts = Evaluation::new(&split.test_labels, &predictions)?;
    log::info!(
        "Test set: {} positives, {} negatives",
        counts.total_positive,
        counts.total_negative
    );

    Ok(Report::from(&counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::logic::dataset::tests::{row, write_csv, HEADER};
    use crate::logic::model::ModelError;

    /// Ten sessions: purchases in distinctive months and page values
    fn ten_rows() -> Vec<String> {
        let mut lines = vec![HEADER.to_string()];
        for i in 0..5 {
            lines.push(
                row("Feb", "New_Visitor", "FALSE", "FALSE").replacen("2,", &format!("{},", i), 1),
            );
        }
        for i in 0..5 {
            lines.push(
                row("Nov", "Returning_Visitor", "TRUE", "TRUE")
                    .replacen("2,", &format!("{},", 40 + i), 1),
            );
        }
        lines
    }

    fn seeded(seed: u64) -> Config {
        Config { seed: Some(seed) }
    }

    #[test]
    fn test_end_to_end_ten_rows() {
        let (_dir, path) = write_csv(&ten_rows());

        let report = run(&path, &seeded(7)).unwrap();
        assert_eq!(report.correct + report.incorrect, 4);
        assert!((0.0..=1.0).contains(&report.sensitivity));
        assert!((0.0..=1.0).contains(&report.specificity));
        assert_eq!(report.to_string().lines().count(), 4);
    }

    #[test]
    fn test_separable_data_scores_perfectly() {
        let (_dir, path) = write_csv(&ten_rows());

        for seed in 0..5 {
            let report = run(&path, &seeded(seed)).unwrap();
            assert_eq!(report.incorrect, 0, "seed {}", seed);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let (_dir, path) = write_csv(&ten_rows());
        assert_eq!(run(&path, &seeded(11)).unwrap(), run(&path, &seeded(11)).unwrap());
    }

    #[test]
    fn test_load_error_stops_pipeline() {
        let mut lines = ten_rows();
        lines.push(row("Foo", "New_Visitor", "FALSE", "FALSE"));
        let (_dir, path) = write_csv(&lines);

        assert!(matches!(
            run(&path, &seeded(1)),
            Err(AppError::UnknownMonth { row: 11, .. })
        ));
    }

    #[test]
    fn test_too_few_rows() {
        let (_dir, path) = write_csv(&[
            HEADER.to_string(),
            row("Jan", "New_Visitor", "FALSE", "FALSE"),
        ]);
        assert!(matches!(run(&path, &seeded(1)), Err(AppError::Split(_))));
    }

    #[test]
    fn test_neighbor_count_larger_than_train_set() {
        let (_dir, path) = write_csv(&ten_rows());
        let dataset = load_data(&path).unwrap();
        let mut model = KNeighborsClassifier::new(7);

        assert!(matches!(
            evaluate_model(&mut model, &dataset, &seeded(1)),
            Err(AppError::Model(ModelError::InvalidNeighbors { neighbors: 7, rows: 6 }))
        ));
    }

    #[test]
    fn test_report_matches_evaluate() {
        use crate::logic::evaluation::evaluate;

        let (_dir, path) = write_csv(&ten_rows());
        let dataset = load_data(&path).unwrap();
        let config = seeded(5);
        let report = run(&path, &config).unwrap();

        let split =
            train_test_split(dataset.evidence(), dataset.labels(), DEFAULT_TEST_SIZE, config.seed)
                .unwrap();
        let mut model = KNeighborsClassifier::default();
        model.fit(&evidence_matrix(&split.train_evidence), &split.train_labels).unwrap();
        let predictions = model.predict(&evidence_matrix(&split.test_evidence)).unwrap();

        assert_eq!(
            (report.sensitivity, report.specificity),
            evaluate(&split.test_labels, &predictions)
        );
    }
}
