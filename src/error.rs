//! Error types for the batch check run.
//!
//! A run has exactly two failure classes:
//!
//! - Fatal errors ([`RunError`]) abort the whole run and discard any
//!   statistics accumulated so far: directory listing failures, file open
//!   failures, row decode failures, and output sink failures.
//! - Rule violations are *not* errors — they are first-class output of the
//!   checker (a flagged row), counted and reported while processing
//!   continues. See [`crate::checker::Violation`].
//!
//! Error conversion is automatic via `From` implementations, allowing `?`
//! to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort an entire run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Directory listing failed.
    #[error("failed to list directory {}: {source}", dir.display())]
    ListDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A batch file could not be opened.
    #[error("failed to open {file}: {source}")]
    OpenFile {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// A row in a batch file could not be decoded.
    #[error("decode error in {file} at row {row}: {source}")]
    Decode {
        file: String,
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// Writing a diagnostic or summary line to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for run operations.
pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_file_and_row() {
        let inner = csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "bad field",
        ));
        let err = RunError::Decode {
            file: "INS_01.csv".into(),
            row: 4,
            source: inner,
        };
        let msg = err.to_string();
        assert!(msg.contains("INS_01.csv"));
        assert!(msg.contains("row 4"));
    }

    #[test]
    fn test_output_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: RunError = io_err.into();
        assert!(err.to_string().contains("write output"));
    }
}
