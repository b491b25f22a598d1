use csv::StringRecord;

const BOM: char = '\u{feff}';

/// Drop a leading UTF-8 byte order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Tab when the header line has one, comma otherwise.
pub fn detect_delimiter(first_line: &str) -> u8 {
    if first_line.contains('\t') {
        b'\t'
    } else {
        b','
    }
}

/// Position of `name` in the header row.
///
/// Headers are compared trimmed, without stray BOMs and ignoring ASCII case,
/// so `record_id\u{feff}` and `Data_json` both resolve.
pub fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    let wanted = name.trim();
    headers
        .iter()
        .position(|header| header.trim().trim_matches(BOM).eq_ignore_ascii_case(wanted))
}
