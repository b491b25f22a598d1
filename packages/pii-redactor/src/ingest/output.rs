use std::fmt;
use std::io;

use serde::{Serialize, Serializer};
use serde_json::ser::Formatter;

use crate::common::record::Record;
use crate::error::Result;

/// Header of the redacted CSV
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// PII verdict for one output row
///
/// `Error` marks a payload that could not be parsed even after repair. It is
/// never folded into `Clean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiiFlag {
    Detected,
    Clean,
    Error,
}

impl PiiFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detected => "true",
            Self::Clean => "false",
            Self::Error => "error",
        }
    }
}

impl From<bool> for PiiFlag {
    fn from(is_pii: bool) -> Self {
        if is_pii {
            Self::Detected
        } else {
            Self::Clean
        }
    }
}

impl fmt::Display for PiiFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PiiFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One line of the redacted CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    /// Opaque identifier copied from the input
    pub record_id: String,
    /// Redacted record as JSON, or the unparseable payload for error rows
    pub payload: String,
    pub flag: PiiFlag,
}

impl OutputRow {
    pub fn fields(&self) -> [&str; 3] {
        [&self.record_id, &self.payload, self.flag.as_str()]
    }
}

/// Render a record as `{"key": value,"key": value}`.
///
/// With `ascii_only`, characters outside ASCII are written as `\uXXXX`
/// escapes (UTF-16 surrogate pairs above the BMP).
pub fn render_record(record: &Record, ascii_only: bool) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, RowFormatter { ascii_only });
    record.serialize(&mut ser)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Compact JSON with a space after each key separator
struct RowFormatter {
    ascii_only: bool,
}

impl Formatter for RowFormatter {
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.ascii_only || fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
