use std::fs::File;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::logic::dataset::record::SessionRecord;
use crate::logic::dataset::Dataset;
use crate::logic::features::{FEATURE_LAYOUT, LABEL_COLUMN};

/// Load session records from a CSV file into a dataset
///
/// The whole file is read before anything is returned; any bad row fails the
/// load. The file handle is dropped when this returns.
pub fn load_data(path: &Path) -> AppResult<Dataset> {
    let file = File::open(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| AppError::Csv { row: 0, source })?
        .clone();
    check_columns(&headers)?;

    let mut dataset = Dataset::new();
    for (index, result) in reader.deserialize::<SessionRecord>().enumerate() {
        let row = index + 1;
        let record = result.map_err(|e| row_error(row, &headers, e))?;
        dataset.push(record.to_evidence(row)?, record.label());
    }

    log::info!(
        "Loaded {} sessions from {} ({} purchases)",
        dataset.len(),
        path.display(),
        dataset.positives()
    );
    Ok(dataset)
}

/// Every evidence column and the label column must be present in the header
fn check_columns(headers: &csv::StringRecord) -> AppResult<()> {
    let required = FEATURE_LAYOUT.iter().copied().chain(std::iter::once(LABEL_COLUMN));

    for field in required {
        if !headers.iter().any(|h| h == field) {
            return Err(AppError::MissingField { field });
        }
    }

    Ok(())
}

/// Turn a csv deserialize failure into a field-level parse error
fn row_error(row: usize, headers: &csv::StringRecord, err: csv::Error) -> AppError {
    if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
        let field = de
            .field()
            .and_then(|i| headers.get(i as usize))
            .unwrap_or("<unknown>")
            .to_string();
        return AppError::Parse {
            row,
            field,
            message: de.kind().to_string(),
        };
    }

    AppError::Csv { row, source: err }
}
