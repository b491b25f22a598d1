use regex::Regex;
use serde_json::Value;

use super::field_kind::FieldKind;
use crate::common::record::{is_present, value_text, Record};

/// Street-level words that, together with a postal code, mark an address
const ADDRESS_KEYWORDS: [&str; 7] = [
    "road", "street", "lane", "avenue", "nagar", "colony", "park",
];

/// Outcome of combinatorial detection over one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionResult {
    /// True when at least two fields qualified
    pub is_pii: bool,
    /// Qualifying field names, in record order
    pub fields: Vec<String>,
}

/// Record-level PII detector
///
/// Holds every compiled pattern. Build one with [`PiiDetector::new`] and share
/// it across records (and threads); nothing is recompiled per call.
#[derive(Debug, Clone)]
pub struct PiiDetector {
    phone: Regex,
    aadhar: Regex,
    passport: Regex,
    upi: Regex,
    email: Regex,
    postal_code: Regex,
}

impl Default for PiiDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PiiDetector {
    pub fn new() -> Self {
        Self {
            phone: compile(r"^[0-9]{10}$"),
            aadhar: compile(r"^[0-9]{12}$"),
            passport: compile(r"^[A-Z][0-9]{7}$"),
            upi: compile(r"^[\w.-]+@[\w.-]+$|^[0-9]{10}@\w+$"),
            // Email pattern - local@domain.tld, TLD at least two letters
            email: compile(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$"),
            // Indian PIN code - six digits standing alone
            postal_code: compile(r"\b[0-9]{6}\b"),
        }
    }

    /// Whether `value`, read as the field named `field_name`, matches that
    /// field's fixed sensitive format on its own.
    ///
    /// Email is not checked here; it only counts in combination.
    pub fn is_standalone_pii(&self, field_name: &str, value: &Value) -> bool {
        let kind = FieldKind::from_name(field_name);
        if !kind.is_standalone() || !is_present(value) {
            return false;
        }

        let text = value_text(value);
        let text = text.trim();

        match kind {
            FieldKind::Phone => self.phone.is_match(text),
            FieldKind::Aadhar => self.aadhar.is_match(text),
            FieldKind::Passport => self.passport.is_match(text),
            FieldKind::UpiId => self.upi.is_match(text),
            _ => false,
        }
    }

    /// Two or more whitespace-separated words, each purely alphabetic once
    /// hyphens and apostrophes are removed.
    ///
    /// A single word is never a full name.
    pub fn is_full_name(&self, value: &str) -> bool {
        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() < 2 {
            return false;
        }

        parts.iter().all(|part| {
            let mut letters = part.chars().filter(|c| *c != '-' && *c != '\'').peekable();
            letters.peek().is_some() && letters.all(char::is_alphabetic)
        })
    }

    /// Whether `value` looks like a postal address.
    ///
    /// Either shape suffices:
    /// - structured: has a digit, a comma and at least five words
    /// - keyword: has a six-digit postal code and a street-level keyword
    pub fn is_physical_address(&self, value: &str) -> bool {
        let has_number = value.chars().any(|c| c.is_ascii_digit());
        let has_comma = value.contains(',');
        let enough_words = value.split_whitespace().count() >= 5;

        let has_postal_code = self.postal_code.is_match(value);
        let value_lower = value.to_lowercase();
        let has_keyword = ADDRESS_KEYWORDS
            .iter()
            .any(|keyword| value_lower.contains(keyword));

        (has_number && has_comma && enough_words) || (has_postal_code && has_keyword)
    }

    pub fn is_valid_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    /// Flag a record whose weak identity signals add up to PII.
    ///
    /// `name`, `email` and `address` qualify on their own heuristics.
    /// `device_id` and `ip_address` qualify only when the record also carries a
    /// full name or a valid email. The record is PII when two or more fields
    /// qualify.
    pub fn detect_combinatorial_pii(&self, record: &Record) -> DetectionResult {
        let has_identity = self.has_identity_signal(record);
        let mut fields = Vec::new();

        for (key, value) in record {
            if !is_present(value) {
                continue;
            }

            let text = value_text(value);
            let text = text.trim();

            let qualifies = match FieldKind::from_name(key) {
                FieldKind::Name => self.is_full_name(text),
                FieldKind::Email => self.is_valid_email(text),
                FieldKind::Address => self.is_physical_address(text),
                kind if kind.is_linked_identifier() => has_identity,
                _ => false,
            };

            if qualifies {
                fields.push(key.clone());
            }
        }

        DetectionResult {
            is_pii: fields.len() >= 2,
            fields,
        }
    }

    /// A full name or valid email somewhere in the record ties device and
    /// network identifiers to a person.
    fn has_identity_signal(&self, record: &Record) -> bool {
        let name = record
            .get("name")
            .filter(|value| is_present(value))
            .is_some_and(|value| self.is_full_name(&value_text(value)));

        let email = record
            .get("email")
            .filter(|value| is_present(value))
            .is_some_and(|value| self.is_valid_email(&value_text(value)));

        name || email
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in PII pattern must compile")
}
