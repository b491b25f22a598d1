use serde_json::Value;

use super::detector::PiiDetector;
use super::redactor::mask_value;
use crate::common::record::{is_present, value_text, Record};

/// Which detection pass marked a record as PII
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedBy {
    Standalone,
    Combinatorial,
}

/// A record after detection and masking
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRecord {
    /// Same fields, same order; PII values replaced by their masks
    pub record: Record,
    pub is_pii: bool,
    /// Names of the fields whose values were masked
    pub masked_fields: Vec<String>,
    pub detected_by: Option<DetectedBy>,
}

/// Runs detection and masking over one record at a time
///
/// Holds no per-record state, so one processor can serve any number of
/// records, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct RecordProcessor {
    detector: PiiDetector,
}

impl RecordProcessor {
    pub fn new() -> Self {
        Self::with_detector(PiiDetector::new())
    }

    pub fn with_detector(detector: PiiDetector) -> Self {
        Self { detector }
    }

    /// Detect and mask PII in `record`.
    ///
    /// Every field matching a standalone format is masked. Only if none did is
    /// the original record checked for combinatorial PII, and then only the
    /// qualifying fields are masked.
    pub fn process(&self, record: &Record) -> ProcessedRecord {
        let mut redacted = Record::new();
        let mut masked_fields = Vec::new();

        for (key, value) in record {
            if self.detector.is_standalone_pii(key, value) {
                redacted.insert(key.clone(), masked(key, value));
                masked_fields.push(key.clone());
            } else {
                redacted.insert(key.clone(), value.clone());
            }
        }

        if !masked_fields.is_empty() {
            return ProcessedRecord {
                record: redacted,
                is_pii: true,
                masked_fields,
                detected_by: Some(DetectedBy::Standalone),
            };
        }

        let detection = self.detector.detect_combinatorial_pii(record);
        if !detection.is_pii {
            return ProcessedRecord {
                record: redacted,
                is_pii: false,
                masked_fields,
                detected_by: None,
            };
        }

        for field in detection.fields {
            if let Some(value) = record.get(&field).filter(|value| is_present(value)) {
                redacted.insert(field.clone(), masked(&field, value));
                masked_fields.push(field);
            }
        }

        ProcessedRecord {
            record: redacted,
            is_pii: true,
            masked_fields,
            detected_by: Some(DetectedBy::Combinatorial),
        }
    }
}

fn masked(key: &str, value: &Value) -> Value {
    Value::String(mask_value(key, &value_text(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pii::redactor::GENERIC_MASK;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_standalone_phone_is_masked() {
        let processor = RecordProcessor::new();
        let processed = processor.process(&record(json!({"phone": "9876543210"})));

        assert!(processed.is_pii);
        assert_eq!(processed.record, record(json!({"phone": "98XXXXXX10"})));
        assert_eq!(processed.masked_fields, vec!["phone"]);
        assert_eq!(processed.detected_by, Some(DetectedBy::Standalone));
    }

    #[test]
    fn test_numeric_phone_is_masked() {
        let processor = RecordProcessor::new();
        let processed = processor.process(&record(json!({"phone": 9876543210u64})));

        assert!(processed.is_pii);
        assert_eq!(processed.record["phone"], "98XXXXXX10");
    }

    #[test]
    fn test_aadhar_is_masked() {
        let processor = RecordProcessor::new();
        let processed = processor.process(&record(json!({"aadhar": "123456789012"})));

        assert!(processed.is_pii);
        assert_eq!(processed.record["aadhar"], "1234XXXX9012");
    }

    #[test]
    fn test_non_pii_record_unchanged() {
        let processor = RecordProcessor::new();
        let input = record(json!({"city": "Pune"}));
        let processed = processor.process(&input);

        assert!(!processed.is_pii);
        assert_eq!(processed.record, input);
        assert!(processed.masked_fields.is_empty());
        assert_eq!(processed.detected_by, None);
    }

    #[test]
    fn test_standalone_suppresses_combinatorial() {
        let processor = RecordProcessor::new();
        let processed = processor.process(&record(json!({
            "name": "Asha Rao",
            "phone": "9876543210",
            "email": "asha@example.com"
        })));

        assert!(processed.is_pii);
        assert_eq!(processed.masked_fields, vec!["phone"]);
        assert_eq!(processed.record["name"], "Asha Rao");
        assert_eq!(processed.record["email"], "asha@example.com");
        assert_eq!(processed.record["phone"], "98XXXXXX10");
    }

    #[test]
    fn test_combinatorial_masks_qualifying_fields() {
        let processor = RecordProcessor::new();
        let processed = processor.process(&record(json!({
            "name": "Asha Rao",
            "email": "asha.rao@example.com",
            "city": "Pune",
            "device_id": "abc123"
        })));

        assert!(processed.is_pii);
        assert_eq!(processed.detected_by, Some(DetectedBy::Combinatorial));
        assert_eq!(processed.masked_fields, vec!["name", "email", "device_id"]);
        assert_eq!(
            processed.record,
            record(json!({
                "name": "AXXX RXXXX",
                "email": "asXXX@example.com",
                "city": "Pune",
                "device_id": GENERIC_MASK
            }))
        );
    }

    #[test]
    fn test_single_signal_is_not_masked() {
        let processor = RecordProcessor::new();
        let input = record(json!({"name": "Asha Rao", "device_id": ""}));
        let processed = processor.process(&input);

        assert!(!processed.is_pii);
        assert_eq!(processed.record, input);
    }

    #[test]
    fn test_near_miss_phone_is_not_standalone() {
        let processor = RecordProcessor::new();
        let input = record(json!({"phone": "98765 43210", "order_id": 42}));
        let processed = processor.process(&input);

        assert!(!processed.is_pii);
        assert_eq!(processed.record, input);
    }

    #[test]
    fn test_field_order_preserved() {
        let processor = RecordProcessor::new();
        let processed = processor.process(&record(json!({
            "z_last": "keep",
            "phone": "9876543210",
            "a_first": 1
        })));

        let keys: Vec<&str> = processed.record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z_last", "phone", "a_first"]);
    }
}
