//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::bibtex::BibtexError;

/// Errors that can occur while loading the input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the file.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A positional mapping row has the wrong number of fields.
    #[error("{path}:{line}: expected {expected} fields, found {found}")]
    RecordArity {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A row lacks a column the pipeline reads.
    #[error("row {row} has no column '{column}'")]
    MissingColumn { column: String, row: String },

    // === Bibliography Errors ===
    /// The bibliography could not be parsed.
    #[error("failed to parse bibliography {path}: {source}")]
    Bibtex {
        path: PathBuf,
        #[source]
        source: BibtexError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/etc/codes.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /data/etc/codes.csv");

        let err = IngestError::MissingColumn {
            column: "RMform".to_string(),
            row: "R12".to_string(),
        };
        assert_eq!(err.to_string(), "row R12 has no column 'RMform'");
    }

    #[test]
    fn test_bibtex_error_keeps_source() {
        let err = IngestError::Bibtex {
            path: PathBuf::from("refs.bib"),
            source: BibtexError::DuplicateKey {
                key: "Hahn1964".to_string(),
                line: 9,
            },
        };
        assert_eq!(
            err.to_string(),
            "failed to parse bibliography refs.bib: line 9: duplicate citation key 'Hahn1964'"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
