//! Error handling

use std::path::PathBuf;

use crate::logic::dataset::split::SplitError;
use crate::logic::model::ModelError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input errors
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV at data row {row}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column `{field}`")]
    MissingField { field: &'static str },

    #[error("data row {row}: cannot parse `{field}`: {message}")]
    Parse {
        row: usize,
        field: String,
        message: String,
    },

    #[error("data row {row}: unknown month abbreviation `{value}`")]
    UnknownMonth { row: usize, value: String },

    // Pipeline errors
    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Model(#[from] ModelError),

    // Configuration errors
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_row_and_field() {
        let err = AppError::Parse {
            row: 3,
            field: "BounceRates".to_string(),
            message: "invalid float literal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "data row 3: cannot parse `BounceRates`: invalid float literal"
        );

        let err = AppError::UnknownMonth { row: 7, value: "Foo".to_string() };
        assert!(err.to_string().contains("`Foo`"));

        let err = AppError::MissingField { field: "Month" };
        assert_eq!(err.to_string(), "missing required column `Month`");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = AppError::Io {
            path: PathBuf::from("/nope/shopping.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("cannot read /nope/shopping.csv"));
    }
}
