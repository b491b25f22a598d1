// PII Redactor - record-level PII detection and masking
//
// This crate detects personally identifiable information inside JSON payloads
// carried by a CSV/TSV file and writes a copy with the sensitive fields masked.
//
// The core (common::pii) works on one parsed record at a time and never fails.
// Everything that touches files, CSV or malformed JSON lives in ingest/.

pub mod common;
pub mod config;
pub mod error;
pub mod ingest;

pub use common::pii::{
    mask_value, DetectedBy, DetectionResult, FieldKind, PiiDetector, ProcessedRecord,
    RecordProcessor, GENERIC_MASK,
};
pub use common::record::Record;
pub use config::*;
pub use error::{exit_code_for, PayloadError, RedactError, Result};
pub use ingest::{redact_csv, redact_file, PiiFlag, RunSummary};
