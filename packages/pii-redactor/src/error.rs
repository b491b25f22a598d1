//! Typed errors for the redaction pipeline.
//!
//! The detection core never fails; these cover file handling and the
//! per-record payload parsing that happens before a record reaches the core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a redaction run.
#[derive(Debug, Error)]
pub enum RedactError {
    /// Input file does not exist
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited input or output could not be processed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A redacted record could not be rendered back to JSON
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The header row lacks a column the pipeline needs
    #[error("missing required column: {column}")]
    MissingColumn { column: String },
}

impl RedactError {
    /// Process exit status for this error.
    ///
    /// Status 2 belongs to clap's usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputNotFound { .. } => 1,
            _ => 3,
        }
    }
}

/// Process exit status for a failed run.
///
/// Looks through any context layered on with `anyhow`; errors that did not
/// come from the pipeline (configuration, for one) map to 3.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<RedactError>()
        .map_or(3, RedactError::exit_code)
}

/// Why a single record's payload could not be turned into a [`crate::Record`].
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Payload is not valid JSON
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Payload is valid JSON but not an object
    #[error("payload is a JSON {kind}, expected an object")]
    NotAnObject { kind: &'static str },
}

/// Result type alias for redaction runs.
pub type Result<T> = std::result::Result<T, RedactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = RedactError::InputNotFound {
            path: PathBuf::from("input.csv"),
        };
        assert_eq!(missing.exit_code(), 1);

        let column = RedactError::MissingColumn {
            column: "record_id".to_string(),
        };
        assert_eq!(column.exit_code(), 3);

        let io = RedactError::Io(std::io::Error::other("disk full"));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_sees_through_context() {
        let missing = anyhow::Error::from(RedactError::InputNotFound {
            path: PathBuf::from("input.csv"),
        })
        .context("Failed to redact input.csv");
        assert_eq!(exit_code_for(&missing), 1);

        let column = anyhow::Error::from(RedactError::MissingColumn {
            column: "data_json".to_string(),
        })
        .context("Failed to redact input.csv");
        assert_eq!(exit_code_for(&column), 3);
    }

    #[test]
    fn test_exit_code_for_foreign_errors() {
        let err = anyhow::anyhow!("REDACT_ASCII_JSON must be true or false");
        assert_eq!(exit_code_for(&err), 3);
    }
}
