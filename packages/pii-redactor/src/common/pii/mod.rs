/// PII (Personally Identifiable Information) detection and masking for records
///
/// A record is one JSON object parsed from an input row. Detection keys off the
/// field name, so a `phone` field is checked against the phone format while an
/// unrecognized field passes through untouched.
///
/// # Detection Methods
///
/// - **Standalone**: the value alone matches a fixed format for its field
///   (phone/contact, aadhar, passport, upi_id)
/// - **Combinatorial**: two or more weak identity signals in the same record
///   (full name, email, physical address, and device/IP identifiers that are
///   linked to a name or email)
///
/// Standalone detection wins. Combinatorial detection only runs when no field
/// in the record matched a standalone format.
///
/// # Examples
///
/// ```rust
/// use pii_redactor::{Record, RecordProcessor};
/// use serde_json::json;
///
/// let processor = RecordProcessor::new();
/// let record: Record = serde_json::from_value(json!({"phone": "9876543210"})).unwrap();
///
/// let processed = processor.process(&record);
/// assert!(processed.is_pii);
/// assert_eq!(processed.record["phone"], "98XXXXXX10");
/// ```

pub mod detector;
pub mod field_kind;
pub mod processor;
pub mod redactor;

// Re-export main types and functions
pub use detector::{DetectionResult, PiiDetector};
pub use field_kind::FieldKind;
pub use processor::{DetectedBy, ProcessedRecord, RecordProcessor};
pub use redactor::{mask_value, GENERIC_MASK};
