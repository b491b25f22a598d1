//! Best-effort repair for payloads that fail to parse as JSON.
//!
//! Only a handful of known export glitches are fixed; anything else is left
//! as-is and the record is reported as an error by the pipeline. The output is
//! never trusted until it parses again.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Stray quote after the closing brace: {"a": "b"}"
    static ref TRAILING_QUOTE_AFTER_BRACE: Regex = Regex::new(r#""\}\s*"$"#).unwrap();

    // Doubled closing quote at end of input: ..."b""
    static ref TRAILING_DOUBLE_QUOTE: Regex = Regex::new(r#""\s*"$"#).unwrap();

    // Unquoted date or bare word value: {"dob": 1990-01-01}, {"city": Pune}
    static ref UNQUOTED_VALUE: Regex =
        Regex::new(r#":\s*(\d{4}-\d{2}-\d{2}|[A-Za-z_]+)([},"])"#).unwrap();

    // Doubled quote before a closing bracket: {"a": "b""}
    static ref DOUBLED_QUOTE_BEFORE_CLOSE: Regex = Regex::new(r#"""(\s*[}\]])"#).unwrap();
}

/// Apply the known fixes, in order, to a malformed payload.
pub fn repair_json(payload: &str) -> String {
    let repaired = TRAILING_QUOTE_AFTER_BRACE.replace(payload.trim(), r#""}"#);
    let repaired = TRAILING_DOUBLE_QUOTE.replace(&repaired, r#"""#);
    let repaired = UNQUOTED_VALUE.replace_all(&repaired, r#": "${1}"${2}"#);
    let repaired = DOUBLED_QUOTE_BEFORE_CLOSE.replace_all(&repaired, r#""${1}"#);
    repaired.into_owned()
}
