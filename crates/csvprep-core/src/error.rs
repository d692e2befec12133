//! Error types for the preprocessing crate

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a chunking or extraction run
#[derive(Debug, Error)]
pub enum PrepError {
    /// The input path does not exist
    #[error("{} not found", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input exists but holds no header row
    #[error("{} is empty: expected a header row", .path.display())]
    EmptyInput { path: PathBuf },

    /// No data row fell on the requested date
    #[error("No data found for {date}")]
    NoMatches { date: String },

    /// Target date is not a `YYYY-MM-DD` calendar date
    #[error("Invalid target date '{value}': expected YYYY-MM-DD")]
    InvalidTargetDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Filesystem operation failed
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing CSV records failed
    #[error("CSV error in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl PrepError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for PrepError
pub type Result<T> = std::result::Result<T, PrepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = PrepError::InputNotFound {
            path: PathBuf::from("data/bme280.csv"),
        };
        assert_eq!(err.to_string(), "data/bme280.csv not found");

        let err = PrepError::NoMatches {
            date: "2025-06-01".to_string(),
        };
        assert_eq!(err.to_string(), "No data found for 2025-06-01");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PrepError::io(Path::new("out/chunk_0.csv"), source);
        assert_eq!(err.to_string(), "I/O error on out/chunk_0.csv");
        assert!(std::error::Error::source(&err).is_some());
    }
}
